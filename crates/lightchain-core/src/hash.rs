//! Stateless hash-based random numbers.
//!
//! Every value is a pure function of an integer key, so a chain driven by the
//! same seed produces the same positions on every frame and every machine.

use std::f32::consts::TAU;

use glam::Vec3;

const SEED_MIX: u32 = 0x9E37_79B9;
const POINT_LONGITUDE_OFFSET: u32 = 28913;
const POINT_HEIGHT_OFFSET: u32 = 92877;

/// Xorshift-multiply avalanche.
pub fn hash(mut s: u32) -> u32 {
    s ^= 2_747_636_419;
    s = s.wrapping_mul(2_654_435_769);
    s ^= s >> 16;
    s = s.wrapping_mul(2_654_435_769);
    s ^= s >> 16;
    s = s.wrapping_mul(2_654_435_769);
    s
}

/// Uniform value in `[0, 1)`.
///
/// Only the top 24 bits are used so the quotient is exact in `f32` and can
/// never round up to 1.0.
pub fn random01(key: u32) -> f32 {
    (hash(key) >> 8) as f32 / 16_777_216.0
}

/// Uniform value in `[-1, 1)`.
pub fn random1(key: u32) -> f32 {
    random01(key) * 2.0 - 1.0
}

/// Mix a user seed into a key. Seed 0 leaves the key untouched.
pub fn seeded(seed: u32, key: u32) -> u32 {
    key.wrapping_add(seed.wrapping_mul(SEED_MIX))
}

/// Uniformly distributed point on the unit sphere for `key`.
pub fn random_point(seed: u32, key: u32) -> Vec3 {
    let key = seeded(seed, key);
    let u = random01(key.wrapping_add(POINT_LONGITUDE_OFFSET)) * TAU;
    let z = random01(key.wrapping_add(POINT_HEIGHT_OFFSET)) * 2.0 - 1.0;
    let v = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(u.cos() * v, u.sin() * v, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_avalanches() {
        assert_eq!(hash(0), hash(0));
        assert_ne!(hash(0), hash(1));
        // Neighbouring keys should differ in many bits.
        assert!((hash(41) ^ hash(42)).count_ones() > 4);
    }

    #[test]
    fn random01_stays_in_half_open_unit_range() {
        for key in (0..200_000u32).chain(u32::MAX - 1000..=u32::MAX) {
            let v = random01(key);
            assert!((0.0..1.0).contains(&v), "key {key} gave {v}");
        }
    }

    #[test]
    fn random1_is_signed() {
        let values: Vec<f32> = (0..1000).map(random1).collect();
        assert!(values.iter().all(|v| (-1.0..1.0).contains(v)));
        assert!(values.iter().any(|v| *v < 0.0));
        assert!(values.iter().any(|v| *v > 0.0));
    }

    #[test]
    fn random_points_lie_on_unit_sphere() {
        for seed in [0u32, 1, 7, 12345, u32::MAX] {
            for key in 0..2000u32 {
                let p = random_point(seed, key);
                assert!((p.length() - 1.0).abs() < 1e-5, "seed {seed} key {key}: {p}");
            }
        }
    }

    #[test]
    fn seed_zero_is_identity_mix() {
        assert_eq!(seeded(0, 17), 17);
        assert_ne!(random_point(1, 17), random_point(0, 17));
    }
}
