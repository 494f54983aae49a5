//! 2D Mathematics Library
//!
//! This crate provides the planar vector type used by the centerfall physics
//! and rendering crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components in double precision

mod vec2;

pub use vec2::Vec2;
