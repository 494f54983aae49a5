//! Rendering Library
//!
//! This crate provides the drawing surface the simulation paints into and the
//! wgpu plumbing that puts it on screen.
//!
//! ## Key Components
//!
//! - [`canvas::Canvas`] - Point-plotting drawing interface with filled disks
//! - [`canvas::FrameBuffer`] - CPU-side RGBA canvas
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::BlitPipeline`] - Uploads a frame buffer and draws it full screen

pub mod canvas;
pub mod context;
pub mod pipeline;

pub use canvas::{Canvas, Color, FrameBuffer};
pub use context::{ContextError, RenderContext};
pub use pipeline::BlitPipeline;
