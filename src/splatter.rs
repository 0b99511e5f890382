//! Paint-splatter burst model for the navigation splash effect.
//!
//! This module is pure and target-independent: burst construction, the
//! per-frame grow/fade step and the outline geometry consumed by the canvas
//! renderer all live here so they can be exercised by host-side `cargo test`.
//! Randomness is injected by the caller; on wasm the renderer passes
//! `js_sys::Math::random`, tests pass a seeded generator.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Grayscale-leaning paint palette, picked uniformly per particle.
pub const PALETTE: [&str; 5] = ["#370808", "#8B3C46", "#D97E8A", "#E7C0BC", "#bbbbbb"];

/// Multiplicative alpha decay applied each frame once a particle is fully grown.
pub const FADE_FACTOR: f64 = 0.95;

/// A fully grown particle below this alpha no longer counts as visible.
pub const DEATH_ALPHA: f64 = 0.05;

/// Chance that a secondary droplet spawns an extra satellite further out.
/// Tuning constant with no deeper rationale; adjust freely.
pub const SATELLITE_CHANCE: f64 = 0.3;

/// Vertex count of the irregular blob silhouette.
pub const BLOB_POINTS: usize = 8;

/// Burst tuning parameters attached to a navigation style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleProfile {
    pub splatter_count: usize,
    pub spread: f64,
    pub grow_speed: f64,
}

/// Navigation styles with distinct splatter characters. Unknown keys resolve
/// to `Default`, so lookup is total and never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStyle {
    Home,
    Works,
    Experience,
    About,
    Menu,
    Default,
}

impl NavStyle {
    pub fn from_key(key: &str) -> Self {
        match key {
            "home" => Self::Home,
            "works" => Self::Works,
            "experience" => Self::Experience,
            "about" => Self::About,
            "menu" => Self::Menu,
            _ => Self::Default,
        }
    }

    pub fn profile(self) -> StyleProfile {
        match self {
            Self::Home => StyleProfile { splatter_count: 10, spread: 1.2, grow_speed: 1.2 },
            Self::Works => StyleProfile { splatter_count: 12, spread: 1.5, grow_speed: 1.0 },
            Self::Experience => StyleProfile { splatter_count: 8, spread: 1.0, grow_speed: 1.3 },
            Self::About => StyleProfile { splatter_count: 15, spread: 0.8, grow_speed: 1.4 },
            Self::Menu => StyleProfile { splatter_count: 5, spread: 1.0, grow_speed: 1.1 },
            Self::Default => StyleProfile { splatter_count: 10, spread: 1.0, grow_speed: 1.0 },
        }
    }
}

/// Silhouette of a single droplet. The blob rotation is fixed per particle so
/// the irregular outline keeps its orientation across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Disc,
    Blob { rotation: f64 },
}

/// One paint droplet. Owned by the active burst's store; never addressed
/// individually outside of it.
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub max_radius: f64,
    pub color: &'static str,
    pub alpha: f64,
    pub grow_speed: f64,
    pub shape: Shape,
    pub wobble: f64,
}

impl Particle {
    /// A particle stays live while it is still growing or still visible.
    pub fn is_alive(&self) -> bool {
        self.radius < self.max_radius || self.alpha > DEATH_ALPHA
    }

    /// One frame of state evolution: grow until full size, then fade.
    pub fn advance(&mut self) {
        if self.radius < self.max_radius {
            self.radius += self.grow_speed;
        } else {
            self.alpha *= FADE_FACTOR;
        }
    }
}

fn pick_color(rng: &mut impl FnMut() -> f64) -> &'static str {
    let idx = (rng() * PALETTE.len() as f64) as usize;
    PALETTE[idx.min(PALETTE.len() - 1)]
}

/// Builds the particle store for one burst: a large primary blot at the
/// origin, `splatter_count` secondary droplets sprayed around it in a
/// quadrant-clustered pattern, and the occasional satellite droplet further
/// out along a secondary's direction.
///
/// Pure construction; the drawing surface is untouched and every randomized
/// parameter lands in a valid range.
pub fn create_burst(
    origin: (f64, f64),
    style: NavStyle,
    rng: &mut impl FnMut() -> f64,
) -> Vec<Particle> {
    let (x, y) = origin;
    let profile = style.profile();
    let mut drops = Vec::with_capacity(1 + profile.splatter_count * 2);

    drops.push(Particle {
        x,
        y,
        radius: 1.0,
        max_radius: 200.0 + (rng() * 50.0 - 25.0),
        color: pick_color(rng),
        alpha: 0.9,
        grow_speed: 12.0 * profile.grow_speed,
        shape: if rng() > 0.5 { Shape::Disc } else { Shape::Blob { rotation: 0.0 } },
        wobble: rng() * 3.0,
    });

    for _ in 0..profile.splatter_count {
        // Cluster directions around the four axes instead of spraying
        // uniformly; the +-72 degree perturbation keeps it organic.
        let cluster = (rng() * 4.0) as usize;
        let base_angle = cluster as f64 * FRAC_PI_2;
        let angle = base_angle + (rng() * 0.8 - 0.4) * PI;

        // Power-skewed distance biases droplets toward the origin.
        let distance_min = 20.0;
        let distance_max = 100.0 * profile.spread;
        let distance = distance_min + rng().powf(1.5) * (distance_max - distance_min);

        let size_variation = rng() * 0.7 + 0.5;
        let alpha_variation = rng() * 0.4 + 0.6;

        let drop = Particle {
            x: x + angle.cos() * distance,
            y: y + angle.sin() * distance,
            radius: 1.0,
            max_radius: (20.0 + rng() * 50.0) * size_variation,
            color: pick_color(rng),
            alpha: ((0.7 + rng() * 0.3) * alpha_variation).min(1.0),
            grow_speed: (5.0 + rng() * 8.0) * profile.grow_speed,
            shape: if rng() > 0.3 {
                Shape::Disc
            } else {
                Shape::Blob { rotation: rng() * TAU }
            },
            wobble: rng() * 5.0,
        };

        let satellite = if rng() < SATELLITE_CHANCE {
            let satellite_angle = angle + (rng() * 0.5 - 0.25) * PI;
            let satellite_distance = distance * 1.3;
            Some(Particle {
                x: x + satellite_angle.cos() * satellite_distance,
                y: y + satellite_angle.sin() * satellite_distance,
                radius: 1.0,
                max_radius: drop.max_radius * 0.4,
                color: drop.color,
                alpha: drop.alpha * 0.8,
                grow_speed: drop.grow_speed * 1.2,
                shape: Shape::Disc,
                wobble: drop.wobble * 0.5,
            })
        } else {
            None
        };

        drops.push(drop);
        if let Some(satellite) = satellite {
            drops.push(satellite);
        }
    }

    drops
}

/// One frame over the whole store: every live particle is handed to `draw`
/// and then advanced. Returns true while at least one particle was live, i.e.
/// while the loop should re-arm. Dead particles are skipped entirely, so
/// re-invoking after the burst has finished is a no-op.
pub fn run_frame<F: FnMut(&Particle)>(drops: &mut [Particle], mut draw: F) -> bool {
    let mut live = false;
    for drop in drops.iter_mut() {
        if drop.is_alive() {
            live = true;
            draw(drop);
            drop.advance();
        }
    }
    live
}

/// Center offset giving discs a slight time-based wobble.
pub fn disc_offset(wobble: f64, now_ms: f64) -> (f64, f64) {
    ((now_ms * 0.01).sin() * wobble, (now_ms * 0.01).cos() * wobble)
}

/// A quadratic curve segment of a blob outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub ctrl: (f64, f64),
    pub to: (f64, f64),
}

/// Closed blob outline: a start point followed by quadratic segments.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobPath {
    pub start: (f64, f64),
    pub segments: Vec<QuadSegment>,
}

/// Computes the 8-vertex irregular outline for a blob-shaped particle.
///
/// Each vertex radius mixes a per-index factor that is stable across frames
/// (a cheap `sin(i * 1000)` hash, so the silhouette does not flicker) with a
/// small continuous time wobble. Vertices run in angular order starting at
/// the particle's rotation; control points sit at the angular midpoints,
/// pushed out to 1.2x for a smooth bulge.
pub fn blob_path(particle: &Particle, now_ms: f64) -> BlobPath {
    let rotation = match particle.shape {
        Shape::Blob { rotation } => rotation,
        Shape::Disc => 0.0,
    };
    let max_radius = particle.radius;
    let min_radius = max_radius * 0.6;
    let wobble_amount = particle.wobble * (min_radius / 50.0);

    let vertex_radius = |i: usize| -> f64 {
        let stable = (i as f64 * 1000.0).sin() * 0.3 + 0.7;
        let radius = min_radius + (max_radius - min_radius) * stable;
        radius + (now_ms * 0.003 + i as f64).sin() * wobble_amount
    };
    let vertex_angle = |i: usize| (i as f64 / BLOB_POINTS as f64) * TAU + rotation;

    let start_radius = vertex_radius(0);
    let start = (
        particle.x + vertex_angle(0).cos() * start_radius,
        particle.y + vertex_angle(0).sin() * start_radius,
    );

    let mut segments = Vec::with_capacity(BLOB_POINTS);
    for i in 1..=BLOB_POINTS {
        let angle = vertex_angle(i);
        let radius = vertex_radius(i);
        let mid_angle = (vertex_angle(i - 1) + angle) / 2.0;
        segments.push(QuadSegment {
            ctrl: (
                particle.x + mid_angle.cos() * radius * 1.2,
                particle.y + mid_angle.sin() * radius * 1.2,
            ),
            to: (
                particle.x + angle.cos() * radius,
                particle.y + angle.sin() * radius,
            ),
        });
    }

    BlobPath { start, segments }
}
