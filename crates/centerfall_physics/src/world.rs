//! Gravity world and per-tick simulation

use crate::body::{has_arrived, Body};
use crate::spawn::spawn_bodies;
use centerfall_math::Vec2;
use rand::Rng;

/// Window width in pixels, also the right wall of the arena
pub const WINDOW_WIDTH: u32 = 800;
/// Window height in pixels, also the bottom wall of the arena
pub const WINDOW_HEIGHT: u32 = 600;
/// Radius shared by every body, in pixels
pub const BODY_RADIUS: u32 = 20;
/// Pull strength per pixel of distance from the center
pub const GRAVITY_CONSTANT: f64 = 0.5;
/// Number of bodies spawned at startup
pub const BODY_COUNT: usize = 10;

/// Configuration for the simulation
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Pull strength per unit of distance (linear, not inverse-square)
    pub gravity: f64,
    /// Radius of every body
    pub radius: f64,
    /// Arena size; walls sit at 0 and at `bounds` on each axis
    pub bounds: Vec2,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_CONSTANT,
            radius: BODY_RADIUS as f64,
            bounds: Vec2::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64),
        }
    }
}

impl PhysicsConfig {
    /// Create a config with the given gravity and default arena
    pub fn new(gravity: f64) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Set the body radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the arena size
    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.bounds = Vec2::new(width, height);
        self
    }

    /// The point every body is pulled toward
    pub fn center(&self) -> Vec2 {
        self.bounds / 2.0
    }
}

/// Outcome of a single tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based index of the tick that produced this report
    pub tick: u64,
    /// Bodies within one radius of the center this tick
    pub arrived: usize,
    /// Body count minus `arrived`
    pub remaining: usize,
}

impl TickReport {
    /// Whether the loop should run another tick
    pub fn should_continue(&self) -> bool {
        self.remaining > 0
    }
}

/// The simulation state: a fixed, ordered set of bodies
///
/// The body list never grows or shrinks after construction. Arrived bodies
/// keep moving and keep being drawn; arrival only affects [`TickReport`].
pub struct GravityWorld {
    bodies: Vec<Body>,
    /// Physics configuration
    pub config: PhysicsConfig,
    tick: u64,
}

impl GravityWorld {
    /// Create a world from an explicit set of bodies
    pub fn new(config: PhysicsConfig, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            config,
            tick: 0,
        }
    }

    /// Create a world with `count` randomly placed bodies
    pub fn spawn<R: Rng>(config: PhysicsConfig, count: usize, rng: &mut R) -> Self {
        let bodies = spawn_bodies(rng, count, &config);
        Self::new(config, bodies)
    }

    /// All bodies in update order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of ticks stepped so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Advance every body by one tick
    ///
    /// For each body in order:
    /// 1. Move by its velocity
    /// 2. Measure the distance to the center and apply the pull
    /// 3. Reflect off the walls
    /// 4. Count it as arrived if the distance from step 2 is below the radius
    pub fn step(&mut self) -> TickReport {
        let center = self.config.center();
        let gravity = self.config.gravity;
        let radius = self.config.radius;
        let bounds = self.config.bounds;

        let mut remaining = self.bodies.len();
        for body in &mut self.bodies {
            body.advance();
            let distance = body.apply_central_pull(center, gravity);
            body.reflect_off_walls(radius, bounds);

            if has_arrived(distance, radius) {
                remaining -= 1;
            }
        }

        self.tick += 1;

        TickReport {
            tick: self.tick,
            arrived: self.bodies.len() - remaining,
            remaining,
        }
    }
}
