//! Shape generation for 2D primitives

use glam::Vec2;

use super::frame::Frame;
use super::vertex::{Vertex, colors};
use crate::sim::Rect;

/// Floor line thickness in field units
pub const FLOOR_THICKNESS: f32 = 1.0;

/// Generate two triangles covering a rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let min = rect.min();
    let max = rect.max();
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Generate a thick line segment as a quad
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> [Vertex; 6] {
    let dir = (to - from).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// All colored geometry of a frame (text is left to the front-end)
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let (basket_color, fruit_color) = if frame.paused {
        (colors::PAUSED, colors::PAUSED)
    } else {
        (colors::BASKET, colors::FRUIT)
    };

    let mut vertices = Vec::with_capacity(18);
    vertices.extend(line(frame.floor[0], frame.floor[1], FLOOR_THICKNESS, colors::FLOOR));
    vertices.extend(rect(&frame.basket, basket_color));
    vertices.extend(rect(&frame.fruit, fruit_color));
    vertices
}
