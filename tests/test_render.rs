use forcetrace::animate::{write_gif, write_image};
use forcetrace::graph::{EdgeListGraph, Graph};
use forcetrace::placement::VertexPos;
use forcetrace::render::{draw_graph, rasterize, SequenceBounds};
use tempfile::Builder;

fn fixture() -> (EdgeListGraph, VertexPos) {
    let graph = EdgeListGraph::from_edges(&[(0, 1), (1, 2)]);
    let mut pos = VertexPos::new();
    pos.insert(0, (0.0, 0.0));
    pos.insert(1, (100.0, 50.0));
    pos.insert(2, (200.0, 0.0));
    (graph, pos)
}

#[test]
fn test_draw_graph_emits_one_circle_per_vertex_and_one_line_per_edge() {
    let (graph, pos) = fixture();
    let frame = draw_graph(&graph, &pos, 500.0);

    assert_eq!(frame.circles.len(), graph.vertex_count());
    assert_eq!(frame.lines.len(), graph.edges().len());

    let c1 = frame.circles.iter().find(|c| c.vertex == 1).unwrap();
    assert_eq!((c1.cx, c1.cy), (100.0, 50.0));
}

#[test]
fn test_circle_radius_follows_canvas_width() {
    let (graph, pos) = fixture();

    let wide = draw_graph(&graph, &pos, 500.0);
    assert!(wide.circles.iter().all(|c| c.radius == 10.0));

    // Below width 250 the 5-unit floor wins.
    let narrow = draw_graph(&graph, &pos, 100.0);
    assert!(narrow.circles.iter().all(|c| c.radius == 5.0));
}

#[test]
fn test_lines_connect_circle_centers() {
    let (graph, pos) = fixture();
    let frame = draw_graph(&graph, &pos, 500.0);

    for line in &frame.lines {
        let start_matches = frame
            .circles
            .iter()
            .any(|c| (c.cx, c.cy) == (line.x1, line.y1));
        let end_matches = frame
            .circles
            .iter()
            .any(|c| (c.cx, c.cy) == (line.x2, line.y2));
        assert!(start_matches && end_matches);
    }
}

#[test]
fn test_sequence_bounds_cover_every_frame() {
    let (graph, pos) = fixture();
    let first = draw_graph(&graph, &pos, 500.0);

    let mut shifted = pos.clone();
    shifted.insert(0, (-50.0, 300.0));
    let second = draw_graph(&graph, &shifted, 500.0);

    let bounds = SequenceBounds::of(&[first, second]);
    assert_eq!(bounds.min_x, -50.0);
    assert_eq!(bounds.max_x, 200.0);
    assert_eq!(bounds.min_y, 0.0);
    assert_eq!(bounds.max_y, 300.0);
}

#[test]
fn test_rasterize_honors_requested_dimensions() {
    let (graph, pos) = fixture();
    let frame = draw_graph(&graph, &pos, 500.0);
    let bounds = SequenceBounds::of(std::slice::from_ref(&frame));

    let img = rasterize(&frame, bounds, 320, 200);
    assert_eq!(img.width(), 320);
    assert_eq!(img.height(), 200);

    // Something must have been drawn on the black background.
    assert!(img.pixels().any(|p| p.0 != [0, 0, 0]));
}

#[test]
fn test_write_gif_produces_a_nonempty_file() {
    let (graph, pos) = fixture();
    let first = draw_graph(&graph, &pos, 500.0);

    let mut shifted = pos.clone();
    shifted.insert(2, (150.0, 80.0));
    let second = draw_graph(&graph, &shifted, 500.0);

    let tmp = Builder::new()
        .suffix(".gif")
        .tempfile()
        .expect("failed to create temp file");
    write_gif(&[first, second], tmp.path(), 64, 64).expect("GIF export failed");

    let len = tmp.path().metadata().expect("missing output file").len();
    assert!(len > 0, "GIF file is empty");
}

#[test]
fn test_write_image_produces_a_nonempty_file() {
    let (graph, pos) = fixture();
    let frame = draw_graph(&graph, &pos, 500.0);

    let tmp = Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("failed to create temp file");
    write_image(&frame, tmp.path(), 64, 64).expect("PNG export failed");

    let len = tmp.path().metadata().expect("missing output file").len();
    assert!(len > 0, "PNG file is empty");
}
