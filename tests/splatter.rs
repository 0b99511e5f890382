#![cfg(not(target_arch = "wasm32"))]

//! Host-side tests for the pure splatter model: burst structure, frame-step
//! monotonicity, loop termination and silhouette stability.

use portfolio_wasm::splatter::{
    self, create_burst, run_frame, NavStyle, Particle, Shape, DEATH_ALPHA,
};

/// Small deterministic generator standing in for `Math.random`.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

const ALL_KEYS: [&str; 8] = [
    "home",
    "works",
    "experience",
    "about",
    "menu",
    "default",
    "",
    "unknown-key",
];

#[test]
fn style_lookup_is_total() {
    for key in ALL_KEYS {
        let profile = NavStyle::from_key(key).profile();
        assert!(profile.splatter_count > 0);
        assert!(profile.spread > 0.0);
        assert!(profile.grow_speed > 0.0);
    }
    assert_eq!(NavStyle::from_key("unknown-key"), NavStyle::Default);
    assert_eq!(NavStyle::from_key(""), NavStyle::Default);
}

#[test]
fn burst_counts_stay_within_structural_bounds() {
    for (seed, key) in ALL_KEYS.iter().enumerate().map(|(s, k)| (s as u64, *k)) {
        let style = NavStyle::from_key(key);
        let count = style.profile().splatter_count;
        let mut lcg = Lcg::new(seed * 31 + 7);
        let mut rng = || lcg.next_f64();
        let drops = create_burst((100.0, 100.0), style, &mut rng);
        // 1 primary + count secondaries + 0..=count satellites.
        assert!(drops.len() >= 1 + count, "too few particles for {key:?}");
        assert!(drops.len() <= 1 + 2 * count, "too many particles for {key:?}");
    }
}

#[test]
fn every_particle_starts_valid() {
    for seed in 0..50u64 {
        let mut lcg = Lcg::new(seed);
        let mut rng = || lcg.next_f64();
        let drops = create_burst((320.0, 240.0), NavStyle::Works, &mut rng);
        for drop in &drops {
            assert_eq!(drop.radius, 1.0);
            assert!(drop.alpha > 0.0 && drop.alpha <= 1.0, "alpha {}", drop.alpha);
            assert!(drop.max_radius > 0.0);
            assert!(drop.grow_speed > 0.0);
            assert!(drop.wobble >= 0.0);
            assert!(splatter::PALETTE.contains(&drop.color));
        }
    }
}

#[test]
fn rng_at_floor_always_emits_satellites() {
    // A generator pinned at 0 makes every satellite roll succeed, giving the
    // maximum store size.
    let mut rng = || 0.0;
    let drops = create_burst((0.0, 0.0), NavStyle::Home, &mut rng);
    assert_eq!(drops.len(), 1 + 10 * 2);
    // Satellites are always discs and inherit their secondary's color.
    assert_eq!(drops[2].shape, Shape::Disc);
    assert_eq!(drops[2].color, drops[1].color);
    assert!((drops[2].max_radius - drops[1].max_radius * 0.4).abs() < 1e-9);
    assert!((drops[2].grow_speed - drops[1].grow_speed * 1.2).abs() < 1e-9);
}

#[test]
fn rng_at_ceiling_emits_no_satellites() {
    let mut rng = || 0.99;
    let drops = create_burst((0.0, 0.0), NavStyle::Home, &mut rng);
    assert_eq!(drops.len(), 1 + 10);
}

#[test]
fn home_scenario_primary_grow_speed() {
    let profile = NavStyle::from_key("home").profile();
    assert_eq!(profile.splatter_count, 10);
    assert!((profile.spread - 1.2).abs() < 1e-12);
    assert!((profile.grow_speed - 1.2).abs() < 1e-12);

    let mut rng = || 0.99;
    let drops = create_burst((100.0, 100.0), NavStyle::Home, &mut rng);
    let primary = &drops[0];
    assert_eq!(primary.x, 100.0);
    assert_eq!(primary.y, 100.0);
    assert!((primary.grow_speed - 14.4).abs() < 1e-9);
    assert!(primary.max_radius >= 175.0 && primary.max_radius <= 225.0);
    assert!((primary.alpha - 0.9).abs() < 1e-12);
}

#[test]
fn unknown_key_scenario_uses_default_profile() {
    let profile = NavStyle::from_key("unknown-key").profile();
    assert_eq!(profile.splatter_count, 10);
    assert!((profile.spread - 1.0).abs() < 1e-12);
    assert!((profile.grow_speed - 1.0).abs() < 1e-12);

    let mut rng = || 0.99;
    let drops = create_burst((0.0, 0.0), NavStyle::from_key("unknown-key"), &mut rng);
    assert_eq!(drops.len(), 11);
    assert!((drops[0].grow_speed - 12.0).abs() < 1e-9);
}

#[test]
fn radius_grows_and_alpha_fades_monotonically() {
    let mut lcg = Lcg::new(42);
    let mut rng = || lcg.next_f64();
    let mut drops = create_burst((50.0, 50.0), NavStyle::About, &mut rng);

    let mut decay_started = vec![false; drops.len()];
    for _ in 0..1000 {
        let before: Vec<(f64, f64)> = drops.iter().map(|d| (d.radius, d.alpha)).collect();
        let live = run_frame(&mut drops, |_| {});
        for (i, drop) in drops.iter().enumerate() {
            let (radius_before, alpha_before) = before[i];
            if radius_before < drop.max_radius {
                assert!(drop.radius >= radius_before, "radius shrank");
            }
            if decay_started[i] {
                assert!(drop.alpha <= alpha_before, "alpha grew after decay began");
            }
            if drop.radius >= drop.max_radius {
                decay_started[i] = true;
            }
        }
        if !live {
            return;
        }
    }
    panic!("burst never finished");
}

#[test]
fn finished_burst_is_idempotent() {
    let mut lcg = Lcg::new(7);
    let mut rng = || lcg.next_f64();
    let mut drops = create_burst((10.0, 10.0), NavStyle::Menu, &mut rng);

    let mut frames = 0;
    while run_frame(&mut drops, |_| {}) {
        frames += 1;
        assert!(frames < 1000, "burst never finished");
    }

    for drop in &drops {
        assert!(drop.radius >= drop.max_radius);
        assert!(drop.alpha <= DEATH_ALPHA);
    }

    // Re-invoking the frame step draws nothing and does not reschedule.
    let mut draws = 0;
    let live = run_frame(&mut drops, |_| draws += 1);
    assert!(!live);
    assert_eq!(draws, 0);
}

fn blob_particle(wobble: f64) -> Particle {
    Particle {
        x: 40.0,
        y: 60.0,
        radius: 35.0,
        max_radius: 35.0,
        color: splatter::PALETTE[0],
        alpha: 0.8,
        grow_speed: 6.0,
        shape: Shape::Blob { rotation: 0.5 },
        wobble,
    }
}

#[test]
fn blob_outline_has_eight_segments_and_is_stable_per_frame() {
    let particle = blob_particle(2.0);
    let a = splatter::blob_path(&particle, 1234.0);
    let b = splatter::blob_path(&particle, 1234.0);
    assert_eq!(a.segments.len(), splatter::BLOB_POINTS);
    assert_eq!(a, b);
}

#[test]
fn blob_outline_without_wobble_ignores_time() {
    // The per-vertex variation is a stable hash of the index; with no wobble
    // the silhouette must not drift between frames.
    let particle = blob_particle(0.0);
    let a = splatter::blob_path(&particle, 0.0);
    let b = splatter::blob_path(&particle, 98765.0);
    assert_eq!(a, b);
}

#[test]
fn blob_vertices_stay_between_min_and_max_radius() {
    let particle = blob_particle(0.0);
    let path = splatter::blob_path(&particle, 0.0);
    let min = particle.radius * 0.6 * (1.0 - 1e-9);
    let max = particle.radius * (1.0 + 1e-9);
    for segment in &path.segments {
        let dx = segment.to.0 - particle.x;
        let dy = segment.to.1 - particle.y;
        let distance = (dx * dx + dy * dy).sqrt();
        assert!(distance >= min && distance <= max, "vertex at {distance}");
    }
}

#[test]
fn disc_offset_is_bounded_by_wobble() {
    assert_eq!(splatter::disc_offset(3.0, 0.0), (0.0, 3.0));
    for step in 0..100 {
        let now = step as f64 * 17.3;
        let (dx, dy) = splatter::disc_offset(5.0, now);
        assert!(dx.abs() <= 5.0);
        assert!(dy.abs() <= 5.0);
    }
}
