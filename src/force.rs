// src/force.rs

//! Force-directed layout engines. Two models: the simple logarithmic spring
//! model (fixed iteration count, scalar force) and the parametrized
//! Hooke/Coulomb model (directional forces, early exit, divergence check).
//! Both record one frame before the loop and one frame per iteration.

use std::collections::HashMap;
use std::fmt;

use crate::adjacency::AdjacencyIndex;
use crate::graph::Graph;
use crate::placement::{self, VertexPos};
use crate::render::{self, Frame, DEFAULT_WIDTH};

/// Constants of the logarithmic spring model (Eades 1984, simple form).
#[derive(Debug, Clone, Copy)]
pub struct LogSpringParams {
    /// Attraction coefficient.
    pub c1: f64,
    /// Attraction divisor.
    pub c2: f64,
    /// Repulsion coefficient.
    pub c3: f64,
    /// Step scale applied to the summed force.
    pub c4: f64,
    /// Number of iterations; the model never exits early.
    pub iterations: usize,
}

impl Default for LogSpringParams {
    fn default() -> Self {
        LogSpringParams {
            c1: 2.0,
            c2: 1.0,
            c3: 1.0,
            c4: 0.1,
            iterations: 100,
        }
    }
}

/// Parameters of the Hooke/Coulomb spring model.
#[derive(Debug, Clone, Copy)]
pub struct HookeCoulombParams {
    /// Natural edge length.
    pub luv: f64,
    /// Spring constant for the Hooke term.
    pub kuv1: f64,
    /// Repulsion constant for the inverse-square term.
    pub kuv2: f64,
}

/// Iteration cap of the Hooke/Coulomb loop.
pub const MAX_ITERATIONS: usize = 1000;

/// A per-vertex force magnitude within this tolerance of zero counts as
/// settled.
const FORCE_TOLERANCE: f64 = 5.0;

/// Fraction of the force applied as displacement each iteration.
const STEP: f64 = 0.1;

/// Fatal divergence: a force evaluated to NaN while moving vertices. The
/// run aborts and returns no frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvergenceError {
    pub iteration: usize,
}

impl fmt::Display for ConvergenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to converge: non-finite force at iteration {}",
            self.iteration
        )
    }
}

impl std::error::Error for ConvergenceError {}

fn distance_between(pos: &VertexPos, a: usize, b: usize) -> f64 {
    let (ax, ay) = pos[&a];
    let (bx, by) = pos[&b];
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}

/// Runs the logarithmic spring model from a random placement.
pub fn log_spring_layout(graph: &impl Graph, params: LogSpringParams, seed: u64) -> Vec<Frame> {
    let pos = placement::random_layout(graph, seed);
    log_spring_layout_from(graph, params, pos)
}

/// Runs the logarithmic spring model from the given placement.
///
/// Per vertex: attraction `c1 * log10(dist / c2)` toward each neighbor and
/// repulsion `c3 / dist^(1/4)` from each non-neighbor, summed into a single
/// scalar that is applied (scaled by `c4`) to both coordinates. Vertices are
/// processed in graph order and updated in place, so later vertices in the
/// same iteration see earlier vertices' new positions.
pub fn log_spring_layout_from(
    graph: &impl Graph,
    params: LogSpringParams,
    mut pos: VertexPos,
) -> Vec<Frame> {
    let adjacency = AdjacencyIndex::build(graph);
    let vertices = graph.vertices();

    let mut frames = Vec::with_capacity(params.iterations + 1);
    frames.push(render::draw_graph(graph, &pos, DEFAULT_WIDTH));

    for _ in 0..params.iterations {
        for &u in &vertices {
            let mut force = 0.0;

            for &v in adjacency.neighbors(u) {
                force += params.c1 * (distance_between(&pos, u, v) / params.c2).log10();
            }

            for &v in adjacency.non_neighbors(u) {
                force += params.c3 / distance_between(&pos, u, v).sqrt().sqrt();
            }

            // The model yields one scalar per vertex; both axes move by it.
            let p = pos.get_mut(&u).unwrap();
            p.0 += params.c4 * force;
            p.1 += params.c4 * force;
        }

        frames.push(render::draw_graph(graph, &pos, DEFAULT_WIDTH));
    }

    frames
}

/// Runs the Hooke/Coulomb model from a random placement.
pub fn hooke_coulomb_layout(
    graph: &impl Graph,
    params: HookeCoulombParams,
    seed: u64,
) -> Result<Vec<Frame>, ConvergenceError> {
    let pos = placement::random_layout(graph, seed);
    hooke_coulomb_layout_from(graph, params, pos)
}

/// Runs the Hooke/Coulomb model from the given placement.
///
/// Forces for one iteration are computed from a single position snapshot,
/// then every vertex moves by `-0.1 * force`. The loop exits early once
/// every vertex's magnitude test passes, and runs at most
/// [`MAX_ITERATIONS`] iterations.
pub fn hooke_coulomb_layout_from(
    graph: &impl Graph,
    params: HookeCoulombParams,
    mut pos: VertexPos,
) -> Result<Vec<Frame>, ConvergenceError> {
    let adjacency = AdjacencyIndex::build(graph);
    let vertices = graph.vertices();

    let mut frames = vec![render::draw_graph(graph, &pos, DEFAULT_WIDTH)];
    let mut forces: HashMap<usize, (f64, f64)> = HashMap::new();

    let mut moving = true;
    let mut iteration = 0;
    while moving && iteration < MAX_ITERATIONS {
        for &u in &vertices {
            let force = hooke_coulomb_force(&params, &vertices, u, &adjacency, &pos);
            forces.insert(u, force);
        }

        // Keep moving as long as any force magnitude stays clear of zero.
        // The radicand subtracts the squared components; when it goes
        // negative the square root is NaN, which fails the near-zero test
        // and keeps the loop running.
        moving = false;
        for &(fx, fy) in forces.values() {
            let magnitude = (fx.powi(2) - fy.powi(2)).sqrt();
            if !(magnitude.abs() < FORCE_TOLERANCE) {
                moving = true;
            }
        }

        // Move each vertex against its force, by a distance proportional to
        // the force.
        for &u in &vertices {
            let (fx, fy) = forces[&u];
            if fx.is_nan() {
                return Err(ConvergenceError { iteration });
            }
            let p = pos.get_mut(&u).unwrap();
            p.0 -= STEP * fx;
            p.1 -= STEP * fy;
        }

        frames.push(render::draw_graph(graph, &pos, DEFAULT_WIDTH));
        iteration += 1;
    }

    Ok(frames)
}

/// Directional force on `u`: Hooke's law along each incident edge, plus
/// inverse-square repulsion from every other vertex, adjacent or not.
fn hooke_coulomb_force(
    params: &HookeCoulombParams,
    vertices: &[usize],
    u: usize,
    adjacency: &AdjacencyIndex,
    pos: &VertexPos,
) -> (f64, f64) {
    let (ux, uy) = pos[&u];
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;

    for &v in adjacency.neighbors(u) {
        let length = distance_between(pos, u, v);
        let (vx, vy) = pos[&v];
        sum_x += params.kuv1 * (length - params.luv) * (ux - vx) / length;
        sum_y += params.kuv1 * (length - params.luv) * (uy - vy) / length;
    }

    for &v in vertices {
        if v == u {
            continue;
        }
        let dist = distance_between(pos, u, v);
        let (vx, vy) = pos[&v];
        sum_x += (params.kuv2 / dist.powi(2)) * (ux - vx) / dist;
        sum_y += (params.kuv2 / dist.powi(2)) * (uy - vy) / dist;
    }

    (sum_x, sum_y)
}
