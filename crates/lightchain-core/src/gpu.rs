//! Plain-old-data layouts consumed by a rendering backend.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use crate::params::ChainParams;

/// Indirect draw arguments for instanced ball meshes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct DrawArgs {
    pub index_count: u32,
    pub instance_count: u32,
    pub first_index: u32,
    pub base_vertex: u32,
    pub first_instance: u32,
}

impl DrawArgs {
    pub fn new(index_count: u32, instance_count: u32) -> Self {
        Self {
            index_count,
            instance_count,
            ..Zeroable::zeroed()
        }
    }
}

/// Per-chain shader constants shared by the ball and line passes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ChainUniforms {
    pub transform: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub radius: f32,
    pub ball_scale: f32,
    pub _pad: [f32; 2],
}

impl ChainUniforms {
    pub fn new(transform: Mat4, params: &ChainParams) -> Self {
        Self {
            transform: transform.to_cols_array_2d(),
            color: params.color.to_array(),
            radius: params.radius,
            ball_scale: params.ball_scale,
            _pad: [0.0; 2],
        }
    }
}

/// Pack positions into 16-byte aligned `vec4` slots (w = 0).
pub fn pack_positions(positions: &[Vec3]) -> Vec<[f32; 4]> {
    positions
        .iter()
        .map(|p| Vec4::from((*p, 0.0)).to_array())
        .collect()
}

pub fn as_bytes(packed: &[[f32; 4]]) -> &[u8] {
    bytemuck::cast_slice(packed)
}

/// Vertex count of the line list joining consecutive balls.
/// Saturates at `u32::MAX` rather than wrapping.
pub fn line_vertex_count(ball_count: usize) -> u32 {
    u32::try_from(ball_count.saturating_sub(1))
        .unwrap_or(u32::MAX)
        .saturating_mul(2)
}
