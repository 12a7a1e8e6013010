// Additional integration tests for sampling and timing invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use cube_landing::{ParticleSpec, Rng, PARTICLE_COUNT, PARTICLE_KINDS};

#[test]
fn particle_specs_stay_inside_their_ranges() {
    let (vw, vh) = (1920.0, 1080.0);
    for seed in 1..=64u64 {
        let mut rng = Rng::new(seed);
        for _ in 0..32 {
            let spec = ParticleSpec::sample(&mut rng, vw, vh);
            assert!(
                PARTICLE_KINDS.contains(&spec.kind),
                "unknown particle kind '{}'",
                spec.kind
            );
            assert!((0.0..=vw).contains(&spec.left_px));
            assert!((0.0..=vh).contains(&spec.top_px));
            assert!((0.0..=6.0).contains(&spec.delay_s), "delay {} out of range", spec.delay_s);
            assert!((4.0..=8.0).contains(&spec.duration_s), "duration {} out of range", spec.duration_s);
        }
    }
}

#[test]
fn particle_class_carries_the_kind() {
    let mut rng = Rng::new(7);
    let spec = ParticleSpec::sample(&mut rng, 800.0, 600.0);
    let class = spec.class_name();
    assert!(class.starts_with("particle "));
    assert!(class.ends_with(spec.kind));
}

#[test]
fn particle_pool_constants() {
    assert_eq!(PARTICLE_COUNT, 15);
    assert_eq!(cube_landing::PARTICLE_LIFETIME_MS, 8_000);
    // Kinds double as CSS class suffixes; duplicates would alias styles.
    let mut kinds = PARTICLE_KINDS.to_vec();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), PARTICLE_KINDS.len());
}

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    let mut c = Rng::new(43);
    assert_ne!(Rng::new(42).next_u64(), c.next_u64());
}

#[test]
fn rng_range_and_chance_bounds() {
    let mut rng = Rng::new(99);
    for _ in 0..1000 {
        let v = rng.range(4.0, 8.0);
        assert!((4.0..=8.0).contains(&v));
    }
    assert!(rng.chance(1.1));
    assert!(!rng.chance(0.0));
    // Zero seeds must not wedge the generator.
    let mut zero = Rng::new(0);
    assert_ne!(zero.next_u64(), 0);
}

#[test]
fn trail_tuning_matches_the_page_css() {
    // The trailFade keyframe animation runs 0.5s; removal must not lag it.
    assert_eq!(cube_landing::TRAIL_LIFETIME_MS, 500);
    assert!(cube_landing::TRAIL_PROBABILITY > 0.0 && cube_landing::TRAIL_PROBABILITY < 1.0);
}

#[test]
fn hover_glyph_swap_is_symmetric() {
    use cube_landing::{hover_transform, CURSOR_GLYPH, CURSOR_HOVER_GLYPH};
    assert_ne!(CURSOR_GLYPH, CURSOR_HOVER_GLYPH);
    assert_ne!(hover_transform(true), hover_transform(false));
    assert!(hover_transform(false).ends_with("scale(1)"));
    assert!(hover_transform(true).ends_with("scale(1.5)"));
}

#[test]
fn toast_timings() {
    assert_eq!(cube_landing::TOAST_EXIT_MS, 300);
    assert_eq!(cube_landing::TOAST_VISIBLE_MS, 3_000);
    // Music toasts are deliberately shorter than the general default.
    assert!(cube_landing::MUSIC_TOAST_MS < cube_landing::TOAST_VISIBLE_MS);
}

#[test]
fn notices_are_distinguishable() {
    assert_ne!(cube_landing::COPY_OK_NOTICE, cube_landing::COPY_FAIL_NOTICE);
    assert!(cube_landing::REVEAL_NOTICE.contains("Copy IP"));
    assert!(cube_landing::WELCOME_NOTICE.contains("Cube Network"));
}
