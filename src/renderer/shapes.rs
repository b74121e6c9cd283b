//! Shape generation for 2D primitives
//!
//! Turns draw commands into triangle lists. Text and sprites are left to the
//! backend's own text and texture paths.

use glam::Vec2;
use std::f32::consts::PI;

use super::frame::{DrawCommand, Frame};
use super::vertex::Vertex;

/// Outline width for polygon edges
pub const LINE_WIDTH: f32 = 1.5;
/// Segments used for filled circles
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Corners of a regular polygon; rotation in degrees
pub fn polygon_points(center: Vec2, sides: u32, radius: f32, rotation: f32) -> Vec<Vec2> {
    let sides = sides.max(3);
    let start = rotation.to_radians();
    (0..sides)
        .map(|i| {
            let theta = start + (i as f32 / sides as f32) * 2.0 * PI;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// Generate vertices for a regular polygon outline (one quad per edge)
pub fn polygon_outline(
    center: Vec2,
    sides: u32,
    radius: f32,
    rotation: f32,
    color: [f32; 4],
    width: f32,
) -> Vec<Vertex> {
    let points = polygon_points(center, sides, radius, rotation);
    let mut vertices = Vec::with_capacity(points.len() * 6);

    for (i, &p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];

        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Triangles for one command, empty for text and sprites
pub fn tessellate(command: &DrawCommand) -> Vec<Vertex> {
    match *command {
        DrawCommand::PolygonOutline {
            center,
            sides,
            radius,
            rotation,
            color,
        } => polygon_outline(center, sides, radius, rotation, color, LINE_WIDTH),
        DrawCommand::Rect { min, size, color } => rect(min, size, color),
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => circle(center, radius, color, CIRCLE_SEGMENTS),
        DrawCommand::Sprite { .. } | DrawCommand::Text { .. } => Vec::new(),
    }
}

/// Triangles for a whole frame, in draw order
pub fn tessellate_frame(frame: &Frame) -> Vec<Vertex> {
    frame.commands.iter().flat_map(tessellate).collect()
}
