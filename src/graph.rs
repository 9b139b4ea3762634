// src/graph.rs

// Module for the graph capability consumed by the layout engines.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// What the layout engines need from the external graph structure: vertex
/// and edge enumeration in a stable order, degree lookup, and an adjacency
/// test. Vertex ids are arbitrary unique integers.
pub trait Graph {
    /// All vertex ids, in an order that is stable for the lifetime of a run.
    fn vertices(&self) -> Vec<usize>;

    /// All undirected edges, each pair listed once.
    fn edges(&self) -> Vec<(usize, usize)>;

    /// Number of edges incident to `v`.
    fn degree(&self, v: usize) -> usize;

    /// Whether `u` and `v` are connected by an edge.
    fn has_edge(&self, u: usize, v: usize) -> bool;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

/// In-memory undirected graph backed by an edge list. Vertex order is
/// ascending id so that runs over the same input are deterministic.
pub struct EdgeListGraph {
    vertices: Vec<usize>,
    edges: Vec<(usize, usize)>,
    neighbors: HashMap<usize, HashSet<usize>>,
}

impl EdgeListGraph {
    /// Builds a graph from an explicit vertex set and an edge list.
    /// Self-loops and duplicate edges are dropped; endpoints missing from
    /// `vertices` are added.
    pub fn new(vertices: &[usize], edges: &[(usize, usize)]) -> Self {
        let mut vertex_set: HashSet<usize> = vertices.iter().copied().collect();
        let mut neighbors: HashMap<usize, HashSet<usize>> = HashMap::new();
        let mut unique_edges = Vec::new();

        for &(u, v) in edges {
            if u == v {
                continue;
            }
            vertex_set.insert(u);
            vertex_set.insert(v);
            if neighbors.get(&u).map_or(false, |n| n.contains(&v)) {
                continue;
            }
            neighbors.entry(u).or_default().insert(v);
            neighbors.entry(v).or_default().insert(u);
            unique_edges.push((u.min(v), u.max(v)));
        }

        let mut sorted_vertices: Vec<usize> = vertex_set.into_iter().collect();
        sorted_vertices.sort_unstable();

        EdgeListGraph {
            vertices: sorted_vertices,
            edges: unique_edges,
            neighbors,
        }
    }

    /// Builds a graph whose vertex set is inferred from the edge endpoints.
    pub fn from_edges(edges: &[(usize, usize)]) -> Self {
        EdgeListGraph::new(&[], edges)
    }

    /// Loads a graph from a text edge-list file: one `u v` pair per line,
    /// whitespace-separated. Empty lines and lines starting with `#` are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an `io::Result` with any file error, or `InvalidData` for a
    /// line that does not hold two vertex ids.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(&path)?;
        let reader = BufReader::new(file);

        let mut edges = Vec::new();
        for (line_no, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let edge = match (fields.next(), fields.next()) {
                (Some(u), Some(v)) => match (u.parse::<usize>(), v.parse::<usize>()) {
                    (Ok(u), Ok(v)) => (u, v),
                    _ => {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("line {}: expected two vertex ids, got '{}'", line_no + 1, line),
                        ))
                    }
                },
                _ => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("line {}: expected two vertex ids, got '{}'", line_no + 1, line),
                    ))
                }
            };
            edges.push(edge);
        }

        Ok(EdgeListGraph::from_edges(&edges))
    }
}

impl Graph for EdgeListGraph {
    fn vertices(&self) -> Vec<usize> {
        self.vertices.clone()
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.edges.clone()
    }

    fn degree(&self, v: usize) -> usize {
        self.neighbors.get(&v).map_or(0, |n| n.len())
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors.get(&u).map_or(false, |n| n.contains(&v))
    }
}
