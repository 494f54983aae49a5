//! Simulation system
//!
//! Runs one tick of the gravity demo per frame:
//! - Clear the canvas to black
//! - Step the gravity world
//! - Draw every on-canvas body as a white filled disk
//! - Schedule the next tick

use std::time::{Duration, Instant};
use centerfall_physics::{
    seeded_rng, wall_clock_seed, Body, GravityWorld, PhysicsConfig, TickReport, BODY_COUNT,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};
use centerfall_render::{Canvas, Color, FrameBuffer};
use crate::config::AppConfig;

/// Pause between the end of one tick and the start of the next
pub const TICK_DELAY: Duration = Duration::from_millis(100);

/// Owns the simulation state and the canvas it is drawn on
pub struct SimulationSystem {
    world: GravityWorld,
    canvas: FrameBuffer,
    log_ticks: bool,
    next_tick: Instant,
}

impl SimulationSystem {
    /// Build a system around an existing world
    ///
    /// The canvas matches the world's bounds and starts cleared to black.
    pub fn new(world: GravityWorld) -> Self {
        let bounds = world.config.bounds;
        let mut canvas = FrameBuffer::new(bounds.x as u32, bounds.y as u32);
        canvas.set_draw_color(Color::BLACK);
        canvas.clear();

        Self {
            world,
            canvas,
            log_ticks: false,
            next_tick: Instant::now(),
        }
    }

    /// Spawn the default world from the app config
    pub fn from_config(config: &AppConfig) -> Self {
        let seed = config.simulation.seed.unwrap_or_else(wall_clock_seed);
        let mut rng = seeded_rng(seed);
        let world = GravityWorld::spawn(PhysicsConfig::default(), BODY_COUNT, &mut rng);

        log::info!(
            "Spawned {} bodies in a {}x{} arena (seed {})",
            world.body_count(),
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            seed
        );

        let mut system = Self::new(world);
        system.log_ticks = config.debug.log_ticks;
        system
    }

    /// Run one tick and redraw the canvas
    pub fn tick(&mut self) -> TickReport {
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();

        let report = self.world.step();

        let radius = self.world.config.radius;
        let bounds = self.world.config.bounds;
        self.canvas.set_draw_color(Color::WHITE);
        for body in self.world.bodies() {
            if !overlaps_canvas(body, radius, bounds.x, bounds.y) {
                continue;
            }
            let (x, y) = body.pixel_position();
            self.canvas.fill_circle(x, y, radius as i32);
        }

        if self.log_ticks {
            log::debug!(
                "Tick {}: {} arrived, {} remaining",
                report.tick,
                report.arrived,
                report.remaining
            );
        }

        self.next_tick = Instant::now() + TICK_DELAY;
        report
    }

    /// The frame produced by the last tick
    pub fn canvas(&self) -> &FrameBuffer {
        &self.canvas
    }

    /// The simulated bodies and their physics config
    pub fn world(&self) -> &GravityWorld {
        &self.world
    }

    /// When the next tick is due
    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    /// Whether the tick delay has elapsed at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }
}

/// Whether any part of the body's disk can land on a `width` x `height` canvas
///
/// Non-finite positions never overlap.
fn overlaps_canvas(body: &Body, radius: f64, width: f64, height: f64) -> bool {
    let p = body.position;
    p.x.is_finite()
        && p.y.is_finite()
        && p.x >= -radius
        && p.x <= width + radius
        && p.y >= -radius
        && p.y <= height + radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use centerfall_math::Vec2;

    fn single_body_system(body: Body, gravity: f64) -> SimulationSystem {
        let world = GravityWorld::new(PhysicsConfig::new(gravity), vec![body]);
        SimulationSystem::new(world)
    }

    #[test]
    fn test_canvas_matches_arena() {
        let system = single_body_system(Body::new(Vec2::new(100.0, 100.0)), 0.0);
        assert_eq!(system.canvas().width(), WINDOW_WIDTH);
        assert_eq!(system.canvas().height(), WINDOW_HEIGHT);
        assert_eq!(system.canvas().count_color(Color::WHITE), 0);
    }

    #[test]
    fn test_tick_draws_body_disk() {
        let mut system = single_body_system(Body::new(Vec2::new(100.0, 100.0)), 0.0);
        system.tick();

        let canvas = system.canvas();
        assert_eq!(canvas.pixel(100, 100), Some(Color::WHITE));
        assert_eq!(canvas.pixel(120, 100), Some(Color::WHITE));
        assert_eq!(canvas.pixel(121, 100), Some(Color::BLACK));
    }

    #[test]
    fn test_tick_clears_previous_frame() {
        let body = Body::new(Vec2::new(100.0, 100.0)).with_velocity(Vec2::new(100.0, 0.0));
        let mut system = single_body_system(body, 0.0);

        system.tick();
        let drawn = system.canvas().count_color(Color::WHITE);
        assert_eq!(system.canvas().pixel(200, 100), Some(Color::WHITE));

        system.tick();
        assert_eq!(system.canvas().pixel(200, 100), Some(Color::BLACK));
        assert_eq!(system.canvas().pixel(300, 100), Some(Color::WHITE));
        assert_eq!(system.canvas().count_color(Color::WHITE), drawn);
    }

    #[test]
    fn test_single_centered_body_stops_after_first_tick() {
        let center = PhysicsConfig::default().center();
        let mut system = single_body_system(Body::new(center), 0.0);

        let report = system.tick();

        assert!(!report.should_continue());
        assert_eq!(report.tick, 1);
        assert_eq!(system.canvas().pixel(400, 300), Some(Color::WHITE));
    }

    #[test]
    fn test_tick_schedules_next() {
        let mut system = single_body_system(Body::new(Vec2::new(100.0, 100.0)), 0.0);
        let before = Instant::now();
        assert!(system.is_due(before));

        system.tick();

        assert!(system.next_tick() >= before + TICK_DELAY);
        assert!(!system.is_due(before));
    }

    #[test]
    fn test_from_config_with_seed_is_reproducible() {
        let mut config = AppConfig::default();
        config.simulation.seed = Some(11);

        let a = SimulationSystem::from_config(&config);
        let b = SimulationSystem::from_config(&config);

        assert_eq!(a.world().body_count(), BODY_COUNT);
        assert_eq!(a.world().bodies(), b.world().bodies());
    }

    #[test]
    fn test_diverged_body_is_not_drawn() {
        let body = Body::new(Vec2::new(f64::INFINITY, 3e9));
        let mut system = single_body_system(body, 0.0);

        let report = system.tick();

        assert_eq!(report.arrived, 0);
        assert_eq!(system.canvas().count_color(Color::WHITE), 0);
    }

    #[test]
    fn test_nan_body_is_not_drawn_at_origin() {
        let body = Body::new(Vec2::new(f64::NAN, f64::NAN));
        let mut system = single_body_system(body, 0.0);

        let report = system.tick();

        assert_eq!(report.arrived, 0);
        assert!(report.should_continue());
        assert_eq!(system.canvas().pixel(0, 0), Some(Color::BLACK));
        assert_eq!(system.canvas().count_color(Color::WHITE), 0);
    }

    #[test]
    fn test_body_just_off_canvas_is_clipped() {
        // Center 10 px past the right wall, disk still reaches x = 799
        let body = Body::new(Vec2::new(810.0, 300.0));
        let mut system = single_body_system(body, 0.0);

        system.tick();

        assert_eq!(system.canvas().pixel(799, 300), Some(Color::WHITE));
        assert_eq!(system.canvas().pixel(780, 300), Some(Color::BLACK));
    }

    /// First seed whose default world reaches a non-finite position, and the tick it happens on
    fn diverging_seed() -> Option<(u64, u64)> {
        for seed in 0..64 {
            let mut world =
                GravityWorld::spawn(PhysicsConfig::default(), BODY_COUNT, &mut seeded_rng(seed));
            for _ in 0..3000 {
                let report = world.step();
                if world
                    .bodies()
                    .iter()
                    .any(|b| !b.position.x.is_finite() || !b.position.y.is_finite())
                {
                    return Some((seed, report.tick));
                }
                if !report.should_continue() {
                    break;
                }
            }
        }
        None
    }

    #[test]
    fn test_default_run_survives_divergence() {
        let (seed, diverged_at) = diverging_seed().expect("no default world diverged");

        let mut config = AppConfig::default();
        config.simulation.seed = Some(seed);
        let mut system = SimulationSystem::from_config(&config);

        // Past pixel overflow (tens of ticks) and into inf/NaN positions
        for _ in 0..diverged_at + 5 {
            let report = system.tick();
            assert_eq!(report.arrived + report.remaining, BODY_COUNT);
        }
        assert_eq!(system.world().tick_count(), diverged_at + 5);
    }

    #[test]
    fn test_default_seeds_survive_pixel_overflow() {
        for seed in 0..4 {
            let mut config = AppConfig::default();
            config.simulation.seed = Some(seed);
            let mut system = SimulationSystem::from_config(&config);

            for _ in 0..200 {
                if !system.tick().should_continue() {
                    break;
                }
            }
        }
    }
}
