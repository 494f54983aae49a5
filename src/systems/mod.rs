//! Application systems
//!
//! Window, rendering and simulation systems driven by the event loop in `main.rs`.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationSystem, TICK_DELAY};
pub use window::{WindowError, WindowSystem};
