//! Fatal application errors and process exit codes

use std::fmt;
use crate::systems::{RenderError, WindowError};

/// Errors that end the program with a non-zero status
#[derive(Debug)]
pub enum AppError {
    /// The display connection / event loop could not be initialized
    Display(String),
    /// The window could not be created
    Window(WindowError),
    /// The renderer could not be created, or failed beyond recovery
    Renderer(RenderError),
}

impl AppError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Display(_) => 1,
            AppError::Window(_) => 2,
            AppError::Renderer(_) => 3,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Display(msg) => write!(f, "Display could not initialize: {}", msg),
            AppError::Window(e) => write!(f, "{}", e),
            AppError::Renderer(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Window(e) => Some(e),
            AppError::Renderer(e) => Some(e),
            AppError::Display(_) => None,
        }
    }
}

impl From<WindowError> for AppError {
    fn from(e: WindowError) -> Self {
        AppError::Window(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Renderer(e)
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::Display(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let codes = [
            AppError::Display("x".to_string()).exit_code(),
            AppError::Window(WindowError::CreationFailed("x".to_string())).exit_code(),
            AppError::Renderer(RenderError::OutOfMemory).exit_code(),
        ];
        assert!(codes.iter().all(|&c| c != 0));
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }

    #[test]
    fn test_message_includes_underlying_error() {
        let err = AppError::from(WindowError::CreationFailed("no video device".to_string()));
        assert!(err.to_string().contains("no video device"));

        let err = AppError::Display("cannot open display".to_string());
        assert!(err.to_string().contains("cannot open display"));
    }
}
