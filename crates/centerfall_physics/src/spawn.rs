//! Random body placement

use crate::body::Body;
use crate::world::PhysicsConfig;
use centerfall_math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed derived from the current wall-clock time (whole seconds)
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create the simulation RNG from a seed
///
/// The same seed always yields the same bodies.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Spawn `count` bodies fully inside the arena
///
/// Positions are uniform in `[r, w - r) × [r, h - r)` and each velocity
/// component is uniform in `[-1, 1]`. Draw order per body is x, y, vx, vy.
pub fn spawn_bodies<R: Rng>(rng: &mut R, count: usize, config: &PhysicsConfig) -> Vec<Body> {
    let radius = config.radius;
    let bounds = config.bounds;

    (0..count)
        .map(|_| {
            let x = inset_coordinate(rng, radius, bounds.x);
            let y = inset_coordinate(rng, radius, bounds.y);
            let vx = rng.gen_range(-1.0..=1.0);
            let vy = rng.gen_range(-1.0..=1.0);
            Body::new(Vec2::new(x, y)).with_velocity(Vec2::new(vx, vy))
        })
        .collect()
}

// An arena narrower than one body has no valid inset range; use its midpoint.
fn inset_coordinate<R: Rng>(rng: &mut R, radius: f64, extent: f64) -> f64 {
    let (low, high) = (radius, extent - radius);
    if low < high {
        rng.gen_range(low..high)
    } else {
        extent / 2.0
    }
}
