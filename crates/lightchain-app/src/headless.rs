//! Headless host: fixed-step clock and a JSON-lines position sink.

use std::io::Write;

use lightchain_core::FrameSnapshot;
use lightchain_platform::{ChainBackend, FrameData, Result, TimeSource};
use tracing::debug;

/// Fixed frame delta. With a timeline start set, time is driven absolutely
/// (`start + frame * dt`) instead of accumulated, as when a timeline scrubs.
pub struct FixedStep {
    dt: f32,
    timeline_start: Option<f32>,
    frame: u64,
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            timeline_start: None,
            frame: 0,
        }
    }

    pub fn timeline(start: f32, dt: f32) -> Self {
        Self {
            dt,
            timeline_start: Some(start),
            frame: 0,
        }
    }
}

impl TimeSource for FixedStep {
    fn delta_time(&mut self) -> f32 {
        self.frame += 1;
        self.dt
    }

    fn scrub_time(&mut self) -> Option<f32> {
        let start = self.timeline_start?;
        let t = start + self.frame as f32 * self.dt;
        self.frame += 1;
        Some(t)
    }
}

/// Writes one JSON object per frame.
pub struct JsonLinesBackend<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> JsonLinesBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChainBackend for JsonLinesBackend<W> {
    fn init(&mut self) -> Result<()> {
        debug!("json-lines backend ready");
        Ok(())
    }

    fn upload(&mut self, frame: &FrameData<'_>) -> Result<()> {
        let snapshot = FrameSnapshot::new(frame.frame, frame.time, frame.positions);
        serde_json::to_writer(&mut self.out, &snapshot)?;
        self.out.write_all(b"\n")?;
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        debug!("json-lines backend flushed");
        Ok(())
    }
}
