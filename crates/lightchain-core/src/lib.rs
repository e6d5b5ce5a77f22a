//! Lightchain core: platform-agnostic position generation for animated ball chains.

pub mod chain;
pub mod easing;
pub mod error;
pub mod gpu;
pub mod hash;
pub mod motion;
pub mod params;

pub use chain::{ChainClock, ChainState, FrameSnapshot};
pub use error::{ChainError, Result};
pub use gpu::{ChainUniforms, DrawArgs};
pub use motion::{generate, generate_into, MotionType};
pub use params::{ChainParams, Modulation, MotionParams};
