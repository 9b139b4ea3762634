use approx::{assert_abs_diff_eq, assert_relative_eq};
use forcetrace::graph::{EdgeListGraph, Graph};
use forcetrace::placement::{polygon_layout, polygon_points, random_layout, RANDOM_SPREAD};

#[test]
fn test_random_layout_covers_every_vertex_in_range() {
    let graph = EdgeListGraph::new(&[0, 1, 2, 3, 4], &[(0, 1), (2, 3)]);
    let pos = random_layout(&graph, 7);

    assert_eq!(pos.len(), graph.vertex_count());
    for v in graph.vertices() {
        let (x, y) = pos[&v];
        assert!((0.0..RANDOM_SPREAD).contains(&x), "x out of range: {}", x);
        assert!((0.0..RANDOM_SPREAD).contains(&y), "y out of range: {}", y);
    }
}

#[test]
fn test_random_layout_is_reproducible_per_seed() {
    let graph = EdgeListGraph::new(&[0, 1, 2], &[]);

    let a = random_layout(&graph, 42);
    let b = random_layout(&graph, 42);
    assert_eq!(a, b, "equal seeds must reproduce the placement");

    let c = random_layout(&graph, 43);
    assert_ne!(a, c, "different seeds should move at least one vertex");
}

#[test]
fn test_polygon_points_sit_on_the_circle() {
    let radius = 250.0;
    let points = polygon_points(5, 10.0, -20.0, radius);

    assert_eq!(points.len(), 5);
    for (x, y) in &points {
        let dist = ((x - 10.0).powi(2) + (y + 20.0).powi(2)).sqrt();
        assert_relative_eq!(dist, radius, epsilon = 1e-9);
    }
}

#[test]
fn test_polygon_points_are_evenly_spaced() {
    let points = polygon_points(4, 0.0, 0.0, 100.0);

    assert_relative_eq!(points[0].0, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].1, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].0, 0.0, epsilon = 1e-9);
    assert_relative_eq!(points[1].1, 100.0, epsilon = 1e-9);
    assert_relative_eq!(points[2].0, -100.0, epsilon = 1e-9);
    assert_relative_eq!(points[3].1, -100.0, epsilon = 1e-9);
}

#[test]
fn test_polygon_points_empty_for_zero_count() {
    assert!(polygon_points(0, 0.0, 0.0, 50.0).is_empty());
}

#[test]
fn test_polygon_layout_splits_fixed_and_free() {
    let graph = EdgeListGraph::new(&[0, 1, 2, 3, 4], &[(0, 3), (1, 4)]);
    let placement = polygon_layout(&graph, 3, 100.0);

    assert_eq!(placement.fixed, vec![0, 1, 2]);
    assert_eq!(placement.free, vec![3, 4]);

    let polygon = polygon_points(3, 0.0, 0.0, 100.0);
    for (i, &v) in placement.fixed.iter().enumerate() {
        assert_eq!(placement.positions[&v], polygon[i]);
    }
    for &v in &placement.free {
        assert_eq!(placement.positions[&v], (0.0, 0.0));
    }
}

#[test]
fn test_polygon_layout_with_more_corners_than_vertices() {
    let graph = EdgeListGraph::new(&[0, 1, 2], &[]);
    let placement = polygon_layout(&graph, 10, 100.0);

    assert_eq!(placement.fixed.len(), 3);
    assert!(placement.free.is_empty());
}
