//! Per-instance chain state: clock, parameters and the position buffer.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::motion::generate_into;
use crate::params::ChainParams;

/// Chain-local time. Only advances while playing; scrubbing sets it directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainClock {
    time: f32,
    playing: bool,
}

impl Default for ChainClock {
    fn default() -> Self {
        Self {
            time: 0.0,
            playing: true,
        }
    }
}

impl ChainClock {
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    pub fn advance(&mut self, dt: f32, speed: f32) {
        if self.playing {
            self.time += speed * dt;
        }
    }
}

/// One frame of output, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub time: f32,
    pub positions: Vec<[f32; 3]>,
}

impl FrameSnapshot {
    pub fn new(frame: u64, time: f32, positions: &[Vec3]) -> Self {
        Self {
            frame,
            time,
            positions: positions.iter().map(|p| p.to_array()).collect(),
        }
    }
}

pub struct ChainState {
    params: ChainParams,
    clock: ChainClock,
    positions: Vec<Vec3>,
    generated_at: f32,
    frame: u64,
    reallocations: u64,
}

impl ChainState {
    pub fn new(params: ChainParams) -> Self {
        Self {
            params: params.sanitized(),
            clock: ChainClock::default(),
            positions: Vec::new(),
            generated_at: 0.0,
            frame: 0,
            reallocations: 0,
        }
    }

    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    /// Replace the configuration. Values are sanitized here, not per frame.
    pub fn set_params(&mut self, params: ChainParams) {
        self.params = params.sanitized();
    }

    pub fn clock(&self) -> &ChainClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut ChainClock {
        &mut self.clock
    }

    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Clock time the current positions were generated at.
    pub fn generated_at(&self) -> f32 {
        self.generated_at
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of times the position buffer has been (re)allocated.
    pub fn reallocations(&self) -> u64 {
        self.reallocations
    }

    /// Generate positions at the current time, then advance the clock by
    /// `speed * dt`.
    pub fn update(&mut self, dt: f32) -> &[Vec3] {
        self.regenerate();
        self.clock.advance(dt, self.params.speed);
        &self.positions
    }

    /// Jump to `time` and regenerate without advancing.
    pub fn scrub(&mut self, time: f32) -> &[Vec3] {
        self.clock.set_time(time);
        self.regenerate();
        &self.positions
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::new(self.frame, self.generated_at, &self.positions)
    }

    fn regenerate(&mut self) {
        self.ensure_buffer();
        generate_into(
            self.params.motion_type,
            self.clock.time(),
            &self.params.motion,
            &mut self.positions,
        );
        self.generated_at = self.clock.time();
        self.frame += 1;
    }

    /// A count change drops the old buffer and allocates a fresh one.
    fn ensure_buffer(&mut self) {
        let count = self.params.ball_count();
        if self.positions.len() != count {
            debug!(from = self.positions.len(), to = count, "reallocating position buffer");
            self.positions = vec![Vec3::ZERO; count];
            self.reallocations += 1;
        }
    }
}
