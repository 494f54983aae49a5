//! Central-gravity simulation for centerfall
//!
//! This crate provides the simulation state driven by the render loop:
//! - Circular bodies with position and velocity
//! - A pull toward the arena center that grows linearly with distance
//! - Elastic wall reflection
//! - The per-tick arrival count that decides when the loop stops

pub mod body;
pub mod spawn;
pub mod world;

// Re-export commonly used types
pub use body::{has_arrived, Body};
pub use spawn::{seeded_rng, spawn_bodies, wall_clock_seed};
pub use world::{
    GravityWorld, PhysicsConfig, TickReport, BODY_COUNT, BODY_RADIUS, GRAVITY_CONSTANT,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};
