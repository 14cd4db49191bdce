//! Vertex type for the colored-triangle pipeline

use bytemuck::{Pod, Zeroable};

/// A 3D position with an RGBA color, interpolated across triangles
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
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
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BALL: [f32; 4] = [0.8, 0.0, 0.1, 1.0];
    /// Bar corner colors, interpolated across the face:
    /// (+w,+h), (+w,-h), (-w,-h), (-w,+h)
    pub const BAR_CORNERS: [[f32; 4]; 4] = [
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0, 1.0],
    ];
    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const WIN_TEXT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const LOSS_TEXT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    pub const BACKGROUND: wgpu::Color = wgpu::Color {
        r: 0.9,
        g: 0.9,
        b: 0.9,
        a: 1.0,
    };
    pub const WIN_BACKGROUND: wgpu::Color = wgpu::Color {
        r: 0.0,
        g: 0.8,
        b: 0.0,
        a: 1.0,
    };
    pub const LOSS_BACKGROUND: wgpu::Color = wgpu::Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
}
