// src/placement.rs

// Module for initial vertex placement: a random spread for the force models,
// polygon boundary plus origin for the barycenter models.

use std::collections::HashMap;
use std::f64::consts::PI;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::graph::Graph;

/// Mapping from vertex id to its (x, y) coordinate. Created fresh per layout
/// run and mutated in place by the engines.
pub type VertexPos = HashMap<usize, (f64, f64)>;

/// Upper bound of the uniform range both coordinates are drawn from.
pub const RANDOM_SPREAD: f64 = 500.0;

/// Assigns every vertex a uniform-random position in
/// [0, `RANDOM_SPREAD`) x [0, `RANDOM_SPREAD`).
///
/// The generator is owned by the call and seeded explicitly, so equal seeds
/// reproduce placements exactly.
pub fn random_layout(graph: &impl Graph, seed: u64) -> VertexPos {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pos = VertexPos::new();
    for v in graph.vertices() {
        let x = rng.gen_range(0.0..RANDOM_SPREAD);
        let y = rng.gen_range(0.0..RANDOM_SPREAD);
        pos.insert(v, (x, y));
    }
    pos
}

/// Returns `count` points on a circle of `radius` around the center, evenly
/// angularly spaced starting at angle zero.
pub fn polygon_points(count: usize, center_x: f64, center_y: f64, radius: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64;
            (
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Positions plus the fixed/free split produced by [`polygon_layout`].
pub struct PolygonPlacement {
    pub positions: VertexPos,
    pub fixed: Vec<usize>,
    pub free: Vec<usize>,
}

/// Places the first `fixed_vertices` vertices (graph iteration order) at the
/// corners of a regular polygon centered on the origin; every remaining
/// vertex starts at the origin as a free vertex.
pub fn polygon_layout(graph: &impl Graph, fixed_vertices: usize, radius: f64) -> PolygonPlacement {
    let polygon = polygon_points(fixed_vertices, 0.0, 0.0, radius);

    let mut positions = VertexPos::new();
    let mut fixed = Vec::new();
    let mut free = Vec::new();
    for v in graph.vertices() {
        if fixed.len() < fixed_vertices {
            positions.insert(v, polygon[fixed.len()]);
            fixed.push(v);
        } else {
            positions.insert(v, (0.0, 0.0));
            free.push(v);
        }
    }

    PolygonPlacement {
        positions,
        fixed,
        free,
    }
}
