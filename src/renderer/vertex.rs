//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::Rgba;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements
pub mod colors {
    use crate::{Rgba, rgb};

    pub const BACKGROUND: Rgba = rgb(0x070b16);
    /// rgba(102, 153, 255, 0.12)
    pub const GRID_LINE: Rgba = [0.4, 0.6, 1.0, 0.12];
    pub const PLAYER_SHOT: Rgba = rgb(0xa7f3d0);
    pub const ALIEN_SHOT: Rgba = rgb(0xff8787);
}
