/// Cubic ease `3x² − 2x³`, input clamped to `[0, 1]`.
pub fn smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Fractional part that wraps negative values into `[0, 1)`.
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smoothstep_clamps_outside_unit_range() {
        assert_eq!(smoothstep(-3.0), 0.0);
        assert_eq!(smoothstep(-0.0001), 0.0);
        assert_eq!(smoothstep(1.5), 1.0);
        assert_eq!(smoothstep(f32::INFINITY), 1.0);
    }

    #[test]
    fn smoothstep_is_monotonic() {
        let mut prev = smoothstep(0.0);
        for i in 1..=1000 {
            let v = smoothstep(i as f32 / 1000.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn fract_wraps_negative_time() {
        assert_eq!(fract(2.25), 0.25);
        assert_eq!(fract(-0.25), 0.75);
        assert_eq!(fract(3.0), 0.0);
    }
}
