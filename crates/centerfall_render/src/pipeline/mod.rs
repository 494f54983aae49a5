//! Rendering pipeline components
//!
//! The simulation draws on the CPU; this module only has to get that image
//! onto the window surface.

pub mod blit_pipeline;

pub use blit_pipeline::BlitPipeline;
