//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a vertex buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex list as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GRAY: [f32; 4] = [0.51, 0.51, 0.51, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.47, 0.95, 1.0];
    pub const PURPLE: [f32; 4] = [0.78, 0.48, 1.0, 1.0];
    pub const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const RED: [f32; 4] = [0.9, 0.16, 0.22, 1.0];
    pub const GOLD: [f32; 4] = [1.0, 0.8, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 0.89, 0.19, 1.0];
    pub const YELLOW: [f32; 4] = [0.99, 0.98, 0.0, 1.0];
}
