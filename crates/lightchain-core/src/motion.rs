//! Procedural motion modes for the ball chain.
//!
//! Every mode is a pure function of `(time, params, count)`. Unmodulated outputs
//! lie on or inside the unit sphere; radius and transform are applied by the
//! renderer.

use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::easing::{fract, smoothstep};
use crate::error::ChainError;
use crate::hash::{random1, random_point, seeded};
use crate::params::{Modulation, MotionParams};

/// Revolutions per ascent of the longitude modes at multiplier 1.
const LONGITUDE_TURNS: f32 = 8.0;

// Band easing window for the rings mode, in fractions of one band.
const RING_EASE_LEAD: f32 = 0.04;
const RING_EASE_WIDTH: f32 = 0.08;
const RING_EASE_START: f32 = 0.96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionType {
    /// All balls rotate with one shared set of angular rates.
    #[default]
    MonoLissajous,
    /// Each ball has its own angular rates.
    MultiLissajous,
    /// Every ball jumps to a new random point on each integer time step.
    SyncedRandom,
    /// Balls trail each other along a single random path.
    OrderedRandom,
    /// Spiral ascent from pole to pole with a fast return.
    LongitudeScan,
    /// Longitude scan with the latitude snapped to discrete bands.
    LongitudeRings,
}

impl MotionType {
    pub const ALL: [MotionType; 6] = [
        MotionType::MonoLissajous,
        MotionType::MultiLissajous,
        MotionType::SyncedRandom,
        MotionType::OrderedRandom,
        MotionType::LongitudeScan,
        MotionType::LongitudeRings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MonoLissajous => "mono_lissajous",
            Self::MultiLissajous => "multi_lissajous",
            Self::SyncedRandom => "synced_random",
            Self::OrderedRandom => "ordered_random",
            Self::LongitudeScan => "longitude_scan",
            Self::LongitudeRings => "longitude_rings",
        }
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionType {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| ChainError::UnknownMotion(s.to_string()))
    }
}

/// Positions of `count` balls at `time`.
pub fn generate(motion: MotionType, time: f32, params: &MotionParams, count: usize) -> Vec<Vec3> {
    let mut positions = vec![Vec3::ZERO; count];
    generate_into(motion, time, params, &mut positions);
    positions
}

/// Fill `out` in place; the ball count is `out.len()`.
pub fn generate_into(motion: MotionType, time: f32, params: &MotionParams, out: &mut [Vec3]) {
    if out.is_empty() {
        return;
    }
    match motion {
        MotionType::MonoLissajous => mono_lissajous(time, params, out),
        MotionType::MultiLissajous => multi_lissajous(time, params, out),
        MotionType::SyncedRandom => synced_random(time, params, out),
        MotionType::OrderedRandom => ordered_random(time, params, out),
        MotionType::LongitudeScan => longitude(time, params, false, out),
        MotionType::LongitudeRings => longitude(time, params, true, out),
    }
    if let Some(modulation) = &params.modulation {
        modulate(modulation, time, out);
    }
}

/// Angular rates in radians per time unit for one random stream.
fn axis_rates(params: &MotionParams, stream: u32) -> Vec3 {
    let base = stream.wrapping_mul(3);
    let key = |axis: u32| seeded(params.seed, base.wrapping_add(axis));
    Vec3::new(random1(key(0)), random1(key(1)), random1(key(2))) * (params.multiplier * PI)
}

/// Rotate the up vector by the Euler angles `angles` (z, then x, then y).
fn rotate_up(angles: Vec3) -> Vec3 {
    let rotation = Quat::from_rotation_y(angles.y)
        * Quat::from_rotation_x(angles.x)
        * Quat::from_rotation_z(angles.z);
    rotation * Vec3::Y
}

fn mono_lissajous(time: f32, params: &MotionParams, out: &mut [Vec3]) {
    let rates = axis_rates(params, 0);
    for (i, p) in out.iter_mut().enumerate() {
        let t = time + i as f32 * params.interval;
        *p = rotate_up(rates * t);
    }
}

fn multi_lissajous(time: f32, params: &MotionParams, out: &mut [Vec3]) {
    for (i, p) in out.iter_mut().enumerate() {
        let rates = axis_rates(params, (i as u32).wrapping_add(1));
        let t = time + i as f32 * params.interval;
        *p = rotate_up(rates * t);
    }
}

/// Integer keyframe index of `t`. Keys wrap when narrowed to `u32`.
fn keyframe(t: f32) -> i64 {
    t.floor() as i64
}

fn synced_random(time: f32, params: &MotionParams, out: &mut [Vec3]) {
    let count = out.len() as i64;
    let base = keyframe(time) * count;
    let s = smoothstep(fract(time));
    for (i, p) in out.iter_mut().enumerate() {
        let key = base + i as i64;
        let from = random_point(params.seed, key as u32);
        let to = random_point(params.seed, (key + count) as u32);
        *p = from.lerp(to, s);
    }
}

fn ordered_random(time: f32, params: &MotionParams, out: &mut [Vec3]) {
    for (i, p) in out.iter_mut().enumerate() {
        let t = time - i as f32 * params.interval;
        let key = keyframe(t);
        let from = random_point(params.seed, key as u32);
        let to = random_point(params.seed, (key + 1) as u32);
        *p = from.lerp(to, smoothstep(fract(t)));
    }
}

fn longitude(time: f32, params: &MotionParams, rings: bool, out: &mut [Vec3]) {
    let div = 1.0 / out.len() as f32;
    let ascent = 1.0 - 0.5 * div;
    let turns = LONGITUDE_TURNS * params.multiplier;
    let bands = turns.round().max(2.0);

    for (i, p) in out.iter_mut().enumerate() {
        let t = time + i as f32 * div;
        let t1 = fract(t);
        let height = if t1 < ascent {
            let progress = t1 / ascent;
            if rings {
                ring_height(progress, bands)
            } else {
                progress * 2.0 - 1.0
            }
        } else {
            1.0 - 2.0 * smoothstep((t1 - ascent) / (0.5 * div))
        };
        let ring = (1.0 - height * height).max(0.0).sqrt();
        let phi = TAU * turns * t;
        *p = Vec3::new(phi.cos() * ring, height, phi.sin() * ring);
    }
}

/// Ascent height with the latitude held on `bands` levels, easing across each
/// band boundary.
fn ring_height(progress: f32, bands: f32) -> f32 {
    let top = bands - 1.0;
    let x = progress * bands;
    let band = x.floor();
    let f = x - band;
    let level = if f >= RING_EASE_START {
        band + smoothstep((f - RING_EASE_START) / RING_EASE_WIDTH)
    } else if f < RING_EASE_LEAD {
        band - 1.0 + smoothstep((f + RING_EASE_LEAD) / RING_EASE_WIDTH)
    } else {
        band
    };
    level.clamp(0.0, top) / top * 2.0 - 1.0
}

fn modulate(modulation: &Modulation, time: f32, out: &mut [Vec3]) {
    for p in out.iter_mut() {
        let wave = (p.y * modulation.multiplier + time * modulation.speed).sin();
        let scale = 1.0 + modulation.amplitude * wave;
        p.x *= scale;
        p.z *= scale;
    }
}
