use glam::Vec3;
use lightchain_core::hash::random_point;
use lightchain_core::*;

fn chain(motion_type: MotionType, ball_count: u32, interval: f32) -> ChainState {
    ChainState::new(ChainParams {
        motion_type,
        ball_count,
        speed: 1.0,
        motion: MotionParams {
            interval,
            multiplier: 1.0,
            seed: 0,
            modulation: None,
        },
        ..Default::default()
    })
}

#[test]
fn mono_lissajous_starts_straight_up() {
    let mut state = chain(MotionType::MonoLissajous, 4, 0.0);
    let positions = state.update(1.0 / 60.0);
    assert_eq!(positions.len(), 4);
    for p in positions {
        assert!(p.abs_diff_eq(Vec3::Y, 1e-6), "{p}");
    }
}

#[test]
fn mono_lissajous_interval_offsets_each_ball() {
    let mut state = chain(MotionType::MonoLissajous, 4, 0.5);
    let positions = state.update(1.0 / 60.0).to_vec();
    assert!(positions[0].abs_diff_eq(Vec3::Y, 1e-6));
    assert!(positions[1..].iter().all(|p| !p.abs_diff_eq(Vec3::Y, 1e-3)));
}

#[test]
fn synced_random_reproduces_keyframes_when_scrubbed_to_integers() {
    let mut state = chain(MotionType::SyncedRandom, 6, 1.0);
    for t in [0.0f32, 3.0, 11.0] {
        let positions = state.scrub(t).to_vec();
        for (i, p) in positions.iter().enumerate() {
            assert_eq!(*p, random_point(0, t as u32 * 6 + i as u32));
        }
    }
}

#[test]
fn sequence_length_tracks_ball_count() {
    let mut state = chain(MotionType::LongitudeRings, 3, 1.0);
    for count in [3u32, 3, 9, 1, 0, 5] {
        let mut params = state.params().clone();
        params.ball_count = count;
        state.set_params(params);
        assert_eq!(state.update(0.02).len(), count.max(1) as usize);
    }
    // 3 -> 9 -> 1 -> 5; the repeated 3 and the clamped 0 reuse the buffer.
    assert_eq!(state.reallocations(), 4);
}

#[test]
fn longitude_heights_stay_real_during_ascent() {
    for count in [1u32, 2, 5, 16] {
        let mut state = chain(MotionType::LongitudeScan, count, 1.0);
        let div = 1.0 / count as f32;
        for step in 0..500 {
            let time = step as f32 * 0.0071;
            let positions = state.scrub(time).to_vec();
            for (i, p) in positions.iter().enumerate() {
                let t1 = (time + i as f32 * div).fract();
                if t1 < 1.0 - 0.5 * div {
                    assert!(p.y * p.y <= 1.0);
                    let ring = (p.x * p.x + p.z * p.z).sqrt();
                    assert!((ring - (1.0 - p.y * p.y).sqrt()).abs() < 1e-4);
                }
            }
        }
    }
}

#[test]
fn paused_chain_holds_its_pose() {
    let mut state = chain(MotionType::MultiLissajous, 5, 0.2);
    state.clock_mut().set_playing(false);
    let first = state.update(0.5).to_vec();
    let second = state.update(0.5).to_vec();
    assert_eq!(first, second);
    assert_eq!(state.time(), 0.0);
}

#[test]
fn config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("lightchain-{}.toml", std::process::id()));
    let params = ChainParams {
        motion_type: MotionType::OrderedRandom,
        ball_count: 12,
        ..Default::default()
    };
    params.save(&path).unwrap();
    let loaded = ChainParams::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, params);
}

#[test]
fn bundled_configs_parse() {
    let rings = ChainParams::from_toml_str(include_str!("../../../configs/rings.toml")).unwrap();
    assert_eq!(rings.motion_type, MotionType::LongitudeRings);
    assert_eq!(rings.ball_count, 48);
    assert!(rings.motion.modulation.is_some());

    let lissajous =
        ChainParams::from_toml_str(include_str!("../../../configs/lissajous.toml")).unwrap();
    assert_eq!(lissajous.motion_type, MotionType::MonoLissajous);
    assert_eq!(lissajous.motion.modulation, None);
}

#[test]
fn lissajous_with_zero_speed_holds_pose() {
    for motion in [MotionType::MonoLissajous, MotionType::MultiLissajous] {
        let mut state = chain(motion, 5, 0.3);
        let mut params = state.params().clone();
        params.speed = 0.0;
        state.set_params(params);
        let expected = generate(motion, 0.0, &state.params().motion, 5);
        for _ in 0..4 {
            assert_eq!(state.update(0.5), expected.as_slice(), "{motion}");
            assert_eq!(state.time(), 0.0);
        }
        assert_eq!(state.frame(), 4);
    }
}
