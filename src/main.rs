//! centerfall - central-gravity demo
//!
//! Opens a window, then runs one simulation tick per frame with a fixed
//! pause between ticks until every body has reached the center.

use std::process::ExitCode;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{StartCause, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use centerfall::config::AppConfig;
use centerfall::error::AppError;
use centerfall::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use centerfall_physics::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    /// Set when the loop ends because of an unrecoverable error
    error: Option<AppError>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let simulation = SimulationSystem::from_config(&config);
        Self {
            config,
            window: None,
            render: None,
            simulation,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    /// Run one tick and put it on screen
    fn run_tick(&mut self, event_loop: &ActiveEventLoop) {
        let report = self.simulation.tick();

        if let Some(render) = &mut self.render {
            match render.present(self.simulation.canvas()) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => {
                    log::warn!("Surface lost on tick {}; frame skipped", report.tick);
                }
                Err(e) => {
                    self.fail(event_loop, AppError::Renderer(e));
                    return;
                }
            }
        }

        if report.should_continue() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.simulation.next_tick()));
        } else {
            log::info!("All bodies reached the center after {} ticks", report.tick);
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(
            event_loop,
            &self.config.window,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
        ) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let mut render = match RenderSystem::new(
            window.window().clone(),
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        // Show the cleared canvas before the first tick
        if let Err(e) = render.present(self.simulation.canvas()) {
            log::warn!("Initial frame not presented: {}", e);
        }

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed before convergence");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                // Expose/resize redraws must not run extra ticks
                if self.simulation.is_due(Instant::now()) {
                    self.run_tick(event_loop);
                } else {
                    event_loop.set_control_flow(ControlFlow::WaitUntil(self.simulation.next_tick()));
                }
            }

            _ => {}
        }
    }
}

fn run(config: AppConfig) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    let config = AppConfig::load();

    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting centerfall");

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
