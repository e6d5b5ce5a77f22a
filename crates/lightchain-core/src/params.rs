//! Chain configuration and its TOML representation.

use std::fs;
use std::path::Path;

use glam::Vec4;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ChainError, Result};
use crate::motion::MotionType;

/// Sinusoidal breathing of the horizontal radius, applied after the motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modulation {
    /// Time frequency of the wave.
    pub speed: f32,
    /// Spatial frequency along the height axis.
    pub multiplier: f32,
    /// Relative radius change; 0 disables the effect.
    pub amplitude: f32,
}

impl Default for Modulation {
    fn default() -> Self {
        Self {
            speed: 1.0,
            multiplier: 4.0,
            amplitude: 0.2,
        }
    }
}

/// Inputs of the position kernel other than time and ball count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Phase spacing between consecutive balls.
    pub interval: f32,
    /// Mode specific intensity: angular rate scale for the Lissajous modes,
    /// revolution count scale for the longitude modes.
    pub multiplier: f32,
    pub seed: u32,
    pub modulation: Option<Modulation>,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            interval: 1.0,
            multiplier: 1.0,
            seed: 0,
            modulation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainParams {
    pub motion_type: MotionType,
    /// Clock rate: chain time advances by `speed * dt` per frame.
    pub speed: f32,
    pub ball_count: u32,
    pub radius: f32,
    pub ball_scale: f32,
    /// Linear HDR colour shared by balls and lines.
    pub color: Vec4,
    pub motion: MotionParams,
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            motion_type: MotionType::default(),
            speed: 1.0,
            ball_count: 10,
            radius: 1.0,
            ball_scale: 1.0,
            color: Vec4::ONE,
            motion: MotionParams::default(),
        }
    }
}

impl ChainParams {
    /// Clamp values into their valid ranges. Corrections are logged, never
    /// reported as errors.
    pub fn sanitize(&mut self) {
        if self.ball_count < 1 {
            warn!(ball_count = self.ball_count, "ball count clamped to 1");
            self.ball_count = 1;
        }
        if self.ball_scale.is_nan() || self.ball_scale < 0.0 {
            warn!(ball_scale = self.ball_scale, "ball scale clamped to 0");
            self.ball_scale = 0.0;
        }
    }

    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    pub fn ball_count(&self) -> usize {
        self.ball_count as usize
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let params: ChainParams = toml::from_str(text)?;
        Ok(params.sanitized())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ChainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let params = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            motion = %params.motion_type,
            balls = params.ball_count,
            "loaded chain config"
        );
        Ok(params)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|source| ChainError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
