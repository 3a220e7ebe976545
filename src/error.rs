//! Error types for startup and configuration
//!
//! The simulation itself never fails; only acquiring a drawing surface and
//! reading tuning files can.

use thiserror::Error;

/// Errors surfaced while bootstrapping the game
#[derive(Debug, Error)]
pub enum InvadersError {
    /// Canvas or GPU surface could not be created
    #[error("Failed to acquire drawing surface: {0}")]
    SurfaceUnavailable(String),

    /// No suitable GPU adapter found
    #[error("No suitable GPU adapter found")]
    NoAdapter,

    /// GPU device request failed
    #[error("GPU device request failed: {0}")]
    DeviceRequest(String),

    /// Tuning JSON could not be parsed
    #[error("Invalid tuning: {0}")]
    Config(#[from] serde_json::Error),

    /// Tuning file could not be read
    #[error("Tuning file IO failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bootstrap operations
pub type Result<T> = std::result::Result<T, InvadersError>;
