use stage_core::*;

#[test]
fn starts_fully_on_the_initial_layer() {
    let fade = Crossfade::new(0, 0.8);
    assert_eq!(fade.current(), 0);
    assert!(!fade.is_fading());
    assert_eq!(fade.layer_opacity(0), 1.0);
    assert_eq!(fade.layer_opacity(1), 0.0);
    assert_eq!(fade.layer_opacity(5), 0.0);
}

#[test]
fn retarget_blends_the_two_layers() {
    let mut fade = Crossfade::new(0, 0.8);
    fade.retarget(1);
    assert!(fade.is_fading());
    assert_eq!(fade.current(), 1);

    // Nothing has ticked yet: old layer still fully visible.
    assert_eq!(fade.layer_opacity(0), 1.0);
    assert_eq!(fade.layer_opacity(1), 0.0);

    fade.tick(0.4); // halfway
    assert!((fade.layer_opacity(0) - 0.5).abs() < 1e-5);
    assert!((fade.layer_opacity(1) - 0.5).abs() < 1e-5);
    let sum = fade.layer_opacity(0) + fade.layer_opacity(1);
    assert!((sum - 1.0).abs() < 1e-5, "blend weights should sum to 1");
}

#[test]
fn fade_completes_after_the_duration() {
    let mut fade = Crossfade::new(0, 0.8);
    fade.retarget(1);
    fade.tick(0.5);
    fade.tick(0.5);
    assert!(!fade.is_fading());
    assert_eq!(fade.layer_opacity(1), 1.0);
    assert_eq!(fade.layer_opacity(0), 0.0);
}

#[test]
fn retarget_to_current_is_a_noop() {
    let mut fade = Crossfade::new(2, 0.8);
    fade.retarget(2);
    assert!(!fade.is_fading());
    assert_eq!(fade.layer_opacity(2), 1.0);
}

#[test]
fn retarget_mid_fade_drops_the_stale_layer() {
    let mut fade = Crossfade::new(0, 0.8);
    fade.retarget(1);
    fade.tick(0.2);
    fade.retarget(2);
    // Layer 0 is out of the picture immediately; 1 fades into 2.
    assert_eq!(fade.layer_opacity(0), 0.0);
    assert!(fade.layer_opacity(1) > 0.0);
    assert_eq!(fade.current(), 2);
}

#[test]
fn exactly_one_layer_is_current() {
    let mut fade = Crossfade::new(0, 0.8);
    fade.retarget(3);
    fade.tick(0.1);
    let playing: Vec<usize> = (0..6).filter(|&i| fade.is_current(i)).collect();
    assert_eq!(playing, vec![3], "only the new layer's media may play");
}

#[test]
fn negative_or_zero_dt_does_not_advance_the_fade() {
    let mut fade = Crossfade::new(0, 0.8);
    fade.retarget(1);
    fade.tick(0.0);
    fade.tick(-1.0);
    assert_eq!(fade.layer_opacity(0), 1.0);
    assert!(fade.is_fading());
}

#[test]
fn parallax_drifts_continuously_with_progress() {
    let cfg = SceneConfig::default();
    assert_eq!(parallax_offset_px(0.0, &cfg), 0.0);
    let quarter = parallax_offset_px(0.25, &cfg);
    let half = parallax_offset_px(0.5, &cfg);
    let full = parallax_offset_px(1.0, &cfg);
    assert!(quarter.abs() < half.abs() && half.abs() < full.abs());
    assert_eq!(full.abs(), cfg.parallax_strength_px);
    // Clamped outside the progress range.
    assert_eq!(parallax_offset_px(5.0, &cfg), full);
    assert_eq!(parallax_offset_px(-1.0, &cfg), 0.0);
}
