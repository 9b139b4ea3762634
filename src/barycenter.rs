// src/barycenter.rs

//! Barycenter layouts: boundary vertices pinned to a polygon, free vertices
//! settling at the average of their neighbors' positions. Two paths: a
//! fixed-point relaxation that records one frame per pass, and an exact
//! linear solve that produces the equilibrium in one step together with the
//! system it solved.

use std::io::{self, Write};
use std::path::Path;

use csv::WriterBuilder;
use ndarray::{Array1, Array2, ArrayView2};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::adjacency::AdjacencyIndex;
use crate::graph::Graph;
use crate::placement;
use crate::render::{self, Frame};
use crate::solver::{
    nalgebra_to_ndarray_vector, ndarray_to_nalgebra_matrix, ndarray_to_nalgebra_vector,
    LinearSolver, SolveError,
};

/// Per-axis movement below which a relaxation pass counts as converged.
const CONVERGENCE_TOLERANCE: f64 = 0.01;

/// Relaxes free vertices to the barycenter of their neighbors by fixed-point
/// iteration.
///
/// The first `fixed_vertices` vertices (graph iteration order) are pinned to
/// a polygon of radius `width / 2` and never move; the rest start at the
/// origin. Each pass sweeps the free vertices in graph order and replaces a
/// vertex's position with the average of its neighbors' current positions
/// (in place, so a pass sees positions updated earlier in the same pass).
/// The loop ends when every free vertex moved less than the tolerance on
/// both axes during a pass, or after `max_passes` passes when a cap is
/// given; `None` leaves the loop unbounded. Frames: one for the initial
/// placement, then one per pass.
pub fn barycenter_layout(
    graph: &impl Graph,
    fixed_vertices: usize,
    width: f64,
    max_passes: Option<usize>,
) -> Vec<Frame> {
    let placement = placement::polygon_layout(graph, fixed_vertices, width / 2.0);
    let mut pos = placement.positions;
    let free = placement.free;
    let adjacency = AdjacencyIndex::build(graph);

    let mut frames = vec![render::draw_graph(graph, &pos, width)];

    let mut passes = 0;
    loop {
        let mut converged = true;

        for &u in &free {
            let degree = graph.degree(u);
            if degree == 0 {
                // Nothing to average against; the vertex stays where it is.
                continue;
            }

            let (current_x, current_y) = pos[&u];
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for &v in adjacency.neighbors(u) {
                let (vx, vy) = pos[&v];
                sum_x += vx;
                sum_y += vy;
            }

            let new_x = sum_x / degree as f64;
            let new_y = sum_y / degree as f64;
            pos.insert(u, (new_x, new_y));

            if (new_x - current_x).abs() >= CONVERGENCE_TOLERANCE
                || (new_y - current_y).abs() >= CONVERGENCE_TOLERANCE
            {
                converged = false;
            }
        }

        frames.push(render::draw_graph(graph, &pos, width));
        passes += 1;

        if converged {
            break;
        }
        if let Some(cap) = max_passes {
            if passes >= cap {
                eprintln!("[barycenter] pass cap {} reached before convergence", cap);
                break;
            }
        }
    }

    frames
}

/// Everything the exact solve produced, kept for inspection and testing.
pub struct BarycenterSolution {
    /// Final layout rendered as a frame.
    pub frame: Frame,
    /// Coefficient matrix over the free vertices: diagonal holds each
    /// vertex's degree, off-diagonal entries are -1 for adjacent free pairs.
    pub matrix: Array2<f64>,
    /// Per-axis right-hand sides: sums of each free vertex's fixed
    /// neighbors' coordinates.
    pub rhs_x: Array1<f64>,
    pub rhs_y: Array1<f64>,
    /// Solved free-vertex coordinates, in free-vertex order.
    pub solution_x: Array1<f64>,
    pub solution_y: Array1<f64>,
}

/// Solves the barycenter layout exactly.
///
/// Builds M * x = bx and M * y = by over the free vertices and delegates to
/// the injected solver; no iteration. The fixed/free partition and polygon
/// placement match [`barycenter_layout`].
///
/// # Errors
///
/// Returns [`SolveError::SingularSystem`] when the system cannot be solved,
/// e.g. when a free vertex has degree zero (an all-zero row).
pub fn barycenter_layout_exact(
    graph: &impl Graph,
    fixed_vertices: usize,
    width: f64,
    solver: &impl LinearSolver,
) -> Result<BarycenterSolution, SolveError> {
    let placement = placement::polygon_layout(graph, fixed_vertices, width / 2.0);
    let mut pos = placement.positions;
    let fixed = placement.fixed;
    let free = placement.free;

    let n = free.len();
    let mut matrix = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            if i == j {
                matrix[[i, j]] = graph.degree(free[i]) as f64;
            } else if graph.has_edge(free[i], free[j]) {
                matrix[[i, j]] = -1.0;
            }
        }
    }

    let mut rhs_x = Array1::<f64>::zeros(n);
    let mut rhs_y = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for &f in &fixed {
            if graph.has_edge(free[i], f) {
                let (fx, fy) = pos[&f];
                sum_x += fx;
                sum_y += fy;
            }
        }
        rhs_x[i] = sum_x;
        rhs_y[i] = sum_y;
    }

    let coefficients = ndarray_to_nalgebra_matrix(&matrix);
    let solution_x = solver.solve(&coefficients, &ndarray_to_nalgebra_vector(&rhs_x))?;
    let solution_y = solver.solve(&coefficients, &ndarray_to_nalgebra_vector(&rhs_y))?;

    for (i, &u) in free.iter().enumerate() {
        pos.insert(u, (solution_x[i], solution_y[i]));
    }

    Ok(BarycenterSolution {
        frame: render::draw_graph(graph, &pos, width),
        matrix,
        rhs_x,
        rhs_y,
        solution_x: nalgebra_to_ndarray_vector(&solution_x),
        solution_y: nalgebra_to_ndarray_vector(&solution_y),
    })
}

impl BarycenterSolution {
    /// Writes the system and its solutions as CSV files into `dir` (created
    /// if missing): matrix.csv, rhs_x.csv, rhs_y.csv, solution_x.csv,
    /// solution_y.csv.
    pub fn save_csv_dir<P: AsRef<Path>>(&self, dir: P) -> io::Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        save_matrix_to_csv(&self.matrix, dir.join("matrix.csv"))?;
        save_vector_to_csv(&self.rhs_x, dir.join("rhs_x.csv"))?;
        save_vector_to_csv(&self.rhs_y, dir.join("rhs_y.csv"))?;
        save_vector_to_csv(&self.solution_x, dir.join("solution_x.csv"))?;
        save_vector_to_csv(&self.solution_y, dir.join("solution_y.csv"))?;
        Ok(())
    }
}

/// Saves a 2-D array to a CSV file, one row per record.
pub fn save_matrix_to_csv<P: AsRef<Path>>(matrix: &Array2<f64>, csv_path: P) -> io::Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(csv_path)?;
    for row in matrix.rows() {
        wtr.serialize(row.to_vec())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Saves a 1-D array to a CSV file as a single record.
pub fn save_vector_to_csv<P: AsRef<Path>>(vector: &Array1<f64>, csv_path: P) -> io::Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(csv_path)?;
    wtr.serialize(vector.to_vec())?;
    wtr.flush()?;
    Ok(())
}

/// Prints a color heatmap of the coefficient matrix to the terminal: zero
/// entries black, the rest on a blue-to-red ramp.
pub fn print_matrix_heatmap(matrix: &ArrayView2<f64>) {
    let non_zero: Vec<f64> = matrix.iter().cloned().filter(|&x| x != 0.0).collect();
    let max_value = non_zero.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_value = non_zero.iter().cloned().fold(f64::INFINITY, f64::min);

    let stdout = StandardStream::stdout(ColorChoice::Always);
    let mut stdout = stdout.lock();

    for i in 0..matrix.nrows() {
        for j in 0..matrix.ncols() {
            let value = matrix[[i, j]];
            let intensity = if (max_value - min_value) != 0.0 {
                ((value - min_value) / (max_value - min_value)).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let color = if value == 0.0 {
                Color::Black
            } else {
                Color::Rgb(
                    (intensity * 255.0) as u8,
                    0,
                    ((1.0 - intensity) * 255.0) as u8,
                )
            };

            let mut color_spec = ColorSpec::new();
            color_spec.set_fg(Some(color));
            let _ = stdout.set_color(&color_spec);
            let _ = write!(stdout, "██");
        }
        let _ = stdout.reset();
        let _ = writeln!(stdout);
    }
}
