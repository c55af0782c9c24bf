use stage_core::*;

fn scene(n: usize) -> SceneConfig {
    SceneConfig {
        total_states: n,
        ..SceneConfig::default()
    }
}

#[test]
fn opacity_always_in_unit_range() {
    for n in [1usize, 2, 3, 7, 12] {
        let cfg = scene(n);
        for i in 0..n {
            for step in 0..=1000 {
                let p = step as f32 / 1000.0;
                let vs = compute_window(i, p, &cfg);
                assert!(
                    (0.0..=1.0).contains(&vs.opacity),
                    "opacity {} out of range at i={i} n={n} p={p}",
                    vs.opacity
                );
                assert!(vs.blur_px >= 0.0);
                assert!(vs.scale > 0.0);
            }
        }
    }
}

#[test]
fn entry_boundary_starts_invisible() {
    let cfg = scene(7);
    for i in 1..7 {
        let start = i as f32 * cfg.slice();
        let vs = compute_window(i, start, &cfg);
        assert_eq!(vs.opacity, 0.0, "section {i} should fade in from 0");
        assert!(!vs.pointer_events);
    }
}

#[test]
fn first_section_never_fades_in() {
    let cfg = scene(7);
    let vs = compute_window(0, 0.0, &cfg);
    assert_eq!(vs.opacity, 1.0);
    assert_eq!(vs.blur_px, 0.0);
    assert_eq!(vs.scale, 1.0);
    assert!(vs.pointer_events);
}

#[test]
fn active_window_is_steady_state() {
    let cfg = scene(7);
    for i in 0..7 {
        let mid = (i as f32 + 0.5) * cfg.slice();
        let vs = compute_window(i, mid, &cfg);
        assert_eq!(vs.opacity, 1.0, "section {i} mid-window");
        assert_eq!(vs.blur_px, 0.0);
        assert_eq!(vs.scale, 1.0);
        assert_eq!(vs.translate_y_px, 0.0);
        assert!(vs.pointer_events);
        assert_eq!(phase_of(i, mid, &cfg), Phase::Active);
    }
}

#[test]
fn entry_ramp_is_linear_in_the_overlap() {
    let cfg = scene(7);
    let start = 2.0 * cfg.slice();
    let half = start + cfg.overlap() * 0.5;
    let vs = compute_window(2, half, &cfg);
    assert!((vs.opacity - 0.5).abs() < 1e-4, "got {}", vs.opacity);
    assert!(vs.translate_y_px > 0.0 && vs.translate_y_px < ENTRY_DRIFT_PX);
    assert!(vs.scale > 1.0 && vs.scale < ENTRY_SCALE);
}

#[test]
fn exit_decays_toward_configured_floor() {
    let cfg = scene(7);
    let end = 3.0 * cfg.slice();
    let late = end + cfg.overlap() * 0.999;
    let vs = compute_window(2, late, &cfg);
    assert!(vs.opacity > cfg.exit_opacity - 1e-3);
    assert!(vs.opacity < 1.0);
    assert!(vs.blur_px > 0.0 && vs.blur_px <= cfg.exit_blur_px);
    assert!(vs.scale < 1.0 && vs.scale >= cfg.exit_scale);
    assert_eq!(phase_of(2, late, &cfg), Phase::Exit);
}

#[test]
fn last_section_never_exits() {
    let cfg = scene(7);
    // From the end of its entry fade through progress 1.0, the last
    // section stays pinned fully active.
    let settled = 6.0 * cfg.slice() + cfg.overlap();
    for step in 0..=100 {
        let p = settled + (step as f32 / 100.0) * (1.0 - settled);
        let vs = compute_window(6, p.min(1.0), &cfg);
        assert_eq!(vs.opacity, 1.0, "last section pinned at p={p}");
        assert_eq!(vs.blur_px, 0.0);
        assert_eq!(vs.scale, 1.0);
    }
    assert_eq!(phase_of(6, 1.0, &cfg), Phase::Active);
}

#[test]
fn sections_outside_their_window_are_inert() {
    let cfg = scene(7);
    let vs = compute_window(5, 0.1, &cfg);
    assert_eq!(vs.opacity, 0.0);
    assert!(!vs.pointer_events);
    assert_eq!(phase_of(5, 0.1, &cfg), Phase::Hidden);
}

#[test]
fn pointer_events_track_the_visibility_threshold() {
    let cfg = scene(7);
    for i in 0..7 {
        for step in 0..=500 {
            let p = step as f32 / 500.0;
            let vs = compute_window(i, p, &cfg);
            assert_eq!(
                vs.pointer_events,
                vs.opacity > cfg.pointer_threshold,
                "i={i} p={p} opacity={}",
                vs.opacity
            );
        }
    }
}

#[test]
fn active_index_midpoint_of_seven() {
    assert_eq!(active_index(0.5, 7), 3);
}

#[test]
fn active_index_clamps_at_the_edges() {
    assert_eq!(active_index(0.0, 7), 0);
    assert_eq!(active_index(1.0, 7), 6);
    assert_eq!(active_index(-0.25, 7), 0);
    assert_eq!(active_index(2.0, 7), 6);
    assert_eq!(active_index(0.99, 1), 0);
}

#[test]
fn zero_overlap_means_hard_cuts() {
    let cfg = SceneConfig {
        total_states: 4,
        overlap_fraction: 0.0,
        ..SceneConfig::default()
    };
    let end = 2.0 * cfg.slice();
    let before = compute_window(1, end - 1e-4, &cfg);
    assert_eq!(before.opacity, 1.0);
    let after = compute_window(1, end + 1e-4, &cfg);
    assert_eq!(after.opacity, 0.0);
}

#[test]
fn out_of_range_progress_is_clamped() {
    let cfg = scene(7);
    let below = compute_window(0, -3.0, &cfg);
    assert_eq!(below.opacity, 1.0); // clamps to p=0, section 0 active
    let above = compute_window(6, 42.0, &cfg);
    assert_eq!(above.opacity, 1.0); // clamps to p=1, last section pinned
}

#[test]
fn adjacent_sections_blend_during_transition() {
    let cfg = scene(7);
    // Just after section 3 begins: section 2 is exiting, section 3 entering.
    let p = 3.0 * cfg.slice() + cfg.overlap() * 0.5;
    let leaving = compute_window(2, p, &cfg);
    let arriving = compute_window(3, p, &cfg);
    assert!(leaving.opacity > 0.0 && arriving.opacity > 0.0);
    // The pair stacks above everything hidden.
    assert!(leaving.z_index > HIDDEN_Z_INDEX);
    assert!(arriving.z_index > HIDDEN_Z_INDEX);
}
