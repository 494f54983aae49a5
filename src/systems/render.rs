//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The blit pipeline
//! - Frame presentation

use std::sync::Arc;
use winit::window::Window;
use centerfall_render::{BlitPipeline, ContextError, FrameBuffer, RenderContext};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Device or surface could not be acquired
    Context(ContextError),
    /// Surface was lost or outdated (window moved between displays, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "Renderer could not be created: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    blit_pipeline: BlitPipeline,
}

impl RenderSystem {
    /// Create render system for a `width × height` canvas
    pub fn new(
        window: Arc<Window>,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;

        let blit_pipeline = BlitPipeline::new(
            &context.device,
            context.config.format,
            width,
            height,
        );

        Ok(Self {
            context,
            blit_pipeline,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Upload `frame` and present it
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<(), RenderError> {
        self.blit_pipeline.upload(&self.context.queue, frame);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(RenderError::OutOfMemory);
            }
            Err(e) => {
                return Err(RenderError::Other(format!("{:?}", e)));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });

        self.blit_pipeline.render(&mut encoder, &view);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
