//! Host-collaborator traits so `lightchain-core` stays engine-agnostic.

use glam::{Mat4, Vec3};
use lightchain_core::gpu::line_vertex_count;
use lightchain_core::{ChainState, ChainUniforms, DrawArgs};
use tracing::trace;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Per-frame timing supplied by the host loop.
pub trait TimeSource {
    /// Seconds since the previous frame.
    fn delta_time(&mut self) -> f32;
    /// Absolute time override, e.g. from a timeline being scrubbed.
    fn scrub_time(&mut self) -> Option<f32> {
        None
    }
}

/// Rendering backend that consumes generated positions.
pub trait ChainBackend {
    fn init(&mut self) -> Result<()>;
    fn upload(&mut self, frame: &FrameData<'_>) -> Result<()>;
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Everything a backend needs to draw one chain for one frame.
pub struct FrameData<'a> {
    pub frame: u64,
    pub time: f32,
    pub positions: &'a [Vec3],
    pub uniforms: ChainUniforms,
    pub draw_args: DrawArgs,
    pub line_vertices: u32,
}

/// Mesh information the backend reports for the ball instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallMesh {
    pub index_count: u32,
}

/// Run one frame: honour a scrub override if present, otherwise tick the
/// chain clock, then hand the result to the backend.
pub fn drive_frame(
    state: &mut ChainState,
    time: &mut dyn TimeSource,
    backend: &mut dyn ChainBackend,
    mesh: BallMesh,
    transform: Mat4,
) -> Result<()> {
    match time.scrub_time() {
        Some(t) => state.scrub(t),
        None => {
            let dt = time.delta_time();
            state.update(dt)
        }
    };
    let count = state.positions().len();
    let frame = FrameData {
        frame: state.frame(),
        time: state.generated_at(),
        positions: state.positions(),
        uniforms: ChainUniforms::new(transform, state.params()),
        draw_args: DrawArgs::new(mesh.index_count, count as u32),
        line_vertices: line_vertex_count(count),
    };
    trace!(frame = frame.frame, balls = count, "uploading chain frame");
    backend.upload(&frame)
}
