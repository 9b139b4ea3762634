// src/render.rs

// Module for turning a position assignment into a drawable frame, and for
// rasterizing frames into RGB images.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use image::{Rgb, RgbImage};

use crate::graph::Graph;
use crate::placement::VertexPos;

/// Canvas width (in layout units) the engines use when recording frames.
pub const DEFAULT_WIDTH: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub vertex: usize,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// One snapshot of the graph at a point in the layout process: one circle
/// per vertex, one line per edge. Immutable once recorded.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: f64,
    pub circles: Vec<Circle>,
    pub lines: Vec<Line>,
}

/// Renders the current positions into a frame. Pure function of its inputs;
/// circle radius is max(5, width / 50).
pub fn draw_graph(graph: &impl Graph, pos: &VertexPos, width: f64) -> Frame {
    let circle_radius = f64::max(5.0, width / 50.0);

    let circles = graph
        .vertices()
        .into_iter()
        .map(|v| {
            let (cx, cy) = pos[&v];
            Circle {
                vertex: v,
                cx,
                cy,
                radius: circle_radius,
            }
        })
        .collect();

    let lines = graph
        .edges()
        .into_iter()
        .map(|(u, v)| {
            let (x1, y1) = pos[&u];
            let (x2, y2) = pos[&v];
            Line { x1, y1, x2, y2 }
        })
        .collect();

    Frame {
        width,
        circles,
        lines,
    }
}

/// Bounding box over every circle of a frame sequence. Rasterizing all
/// frames against the same bounds keeps the animation from jittering as the
/// layout spreads or contracts.
#[derive(Debug, Clone, Copy)]
pub struct SequenceBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SequenceBounds {
    pub fn of(frames: &[Frame]) -> Self {
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for frame in frames {
            for c in &frame.circles {
                if c.cx < min_x {
                    min_x = c.cx;
                }
                if c.cx > max_x {
                    max_x = c.cx;
                }
                if c.cy < min_y {
                    min_y = c.cy;
                }
                if c.cy > max_y {
                    max_y = c.cy;
                }
            }
        }

        if min_x > max_x {
            // No circles at all; a unit box keeps the scaling finite.
            return SequenceBounds {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 1.0,
                max_y: 1.0,
            };
        }

        SequenceBounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    fn range_x(&self) -> f64 {
        (self.max_x - self.min_x).max(1e-5)
    }

    fn range_y(&self) -> f64 {
        (self.max_y - self.min_y).max(1e-5)
    }
}

/// Draws a frame into an `img_width` x `img_height` image on a black
/// background. Layout coordinates are mapped into the canvas with a 5%
/// margin on each side; edges are drawn first, vertices on top.
pub fn rasterize(frame: &Frame, bounds: SequenceBounds, img_width: u32, img_height: u32) -> RgbImage {
    let mut img = RgbImage::new(img_width, img_height);

    let span_x = (img_width.saturating_sub(1)) as f64;
    let span_y = (img_height.saturating_sub(1)) as f64;
    let to_px_x = |x: f64| -> i32 {
        ((0.05 + 0.90 * (x - bounds.min_x) / bounds.range_x()) * span_x).round() as i32
    };
    let to_px_y = |y: f64| -> i32 {
        ((0.05 + 0.90 * (y - bounds.min_y) / bounds.range_y()) * span_y).round() as i32
    };

    for line in &frame.lines {
        draw_line(
            &mut img,
            to_px_x(line.x1),
            to_px_y(line.y1),
            to_px_x(line.x2),
            to_px_y(line.y2),
            Rgb([80, 80, 80]),
        );
    }

    let scale = (0.90 * span_x / bounds.range_x()).min(0.90 * span_y / bounds.range_y());
    for c in &frame.circles {
        let radius = ((c.radius * scale).round() as i32).clamp(2, 30);
        draw_filled_circle(
            &mut img,
            to_px_x(c.cx),
            to_px_y(c.cy),
            radius,
            color_from_vertex(c.vertex),
        );
    }

    img
}

/// Bright high-saturation color derived from a hash of the vertex id, so a
/// vertex keeps its color across frames.
fn color_from_vertex(vertex: usize) -> Rgb<u8> {
    let mut hasher = DefaultHasher::new();
    vertex.hash(&mut hasher);
    let hue = (hasher.finish() % 360) as f32;

    let (r, g, b) = hsl_to_rgb(hue, 0.9, 0.55);
    Rgb([r, g, b])
}

/// Convert HSL to RGB, each channel in [0..255].
/// h in [0..360], s and l in [0..1].
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hh = h / 60.0;
    let x = c * (1.0 - (hh % 2.0 - 1.0).abs());

    let (mut r, mut g, mut b) = match hh as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    r += m;
    g += m;
    b += m;

    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Bresenham line clipped to the image.
fn draw_line(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    let w = img.width() as i32;
    let h = img.height() as i32;

    let dx = (x1 - x0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let step_y = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        if x >= 0 && x < w && y >= 0 && y < h {
            img.put_pixel(x as u32, y as u32, color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Filled circle via a bounding-box scan, clipped to the image.
fn draw_filled_circle(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    let w = img.width() as i32;
    let h = img.height() as i32;
    let rr = radius * radius;

    for dy in -radius..=radius {
        let y = cy + dy;
        if y < 0 || y >= h {
            continue;
        }
        for dx in -radius..=radius {
            let x = cx + dx;
            if x < 0 || x >= w {
                continue;
            }
            if dx * dx + dy * dy <= rr {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
