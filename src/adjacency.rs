// src/adjacency.rs

// Module for the per-run adjacency index that feeds the force formulas.

use std::collections::{HashMap, HashSet};

use crate::graph::Graph;

/// Neighbor and non-neighbor sets for every vertex, built once per layout
/// run and read-only afterwards. For any pair of distinct vertices (u, v),
/// v appears in exactly one of `neighbors(u)` / `non_neighbors(u)`, and a
/// vertex never appears in its own sets.
pub struct AdjacencyIndex {
    neighbors: HashMap<usize, HashSet<usize>>,
    non_neighbors: HashMap<usize, HashSet<usize>>,
}

impl AdjacencyIndex {
    pub fn build(graph: &impl Graph) -> Self {
        let vertices = graph.vertices();

        let mut neighbors: HashMap<usize, HashSet<usize>> = vertices
            .iter()
            .map(|&v| (v, HashSet::new()))
            .collect();
        for (u, v) in graph.edges() {
            neighbors.entry(u).or_default().insert(v);
            neighbors.entry(v).or_default().insert(u);
        }

        let mut non_neighbors: HashMap<usize, HashSet<usize>> = HashMap::new();
        for &u in &vertices {
            let adjacent = &neighbors[&u];
            let complement: HashSet<usize> = vertices
                .iter()
                .copied()
                .filter(|&v| v != u && !adjacent.contains(&v))
                .collect();
            non_neighbors.insert(u, complement);
        }

        AdjacencyIndex {
            neighbors,
            non_neighbors,
        }
    }

    /// Vertices adjacent to `v`.
    pub fn neighbors(&self, v: usize) -> &HashSet<usize> {
        &self.neighbors[&v]
    }

    /// Vertices neither adjacent to `v` nor `v` itself.
    pub fn non_neighbors(&self, v: usize) -> &HashSet<usize> {
        &self.non_neighbors[&v]
    }
}
