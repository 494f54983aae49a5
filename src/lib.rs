//! centerfall - central-gravity demo
//!
//! A fixed set of circles is pulled toward the middle of a window, bouncing
//! off its walls, until every circle sits within one radius of the center in
//! the same tick.

pub mod config;
pub mod error;
pub mod systems;
