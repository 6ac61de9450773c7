//! Crate error type
//!
//! The simulation core is total over well-formed input; errors only come from
//! the checked kinematic entry point, configuration/level validation and
//! level/settings I/O.

use thiserror::Error;

/// Errors raised by validation and persistence.
#[derive(Debug, Error)]
pub enum ParkerError {
    /// Steering step outside `[-max, max]`
    #[error("steering step {step} outside [-{max}, {max}]")]
    SteeringOutOfRange { step: i32, max: i32 },

    /// Speed level outside `[1, max]`
    #[error("speed level {level} outside [1, {max}]")]
    SpeedLevelOutOfRange { level: i32, max: i32 },

    /// Vehicle constants that the kinematic model cannot use
    #[error("invalid vehicle config: {0}")]
    InvalidConfig(String),

    /// Rectangle with zero or negative extent
    #[error("degenerate {what}: {width}x{height}")]
    DegenerateRect {
        what: String,
        width: f32,
        height: f32,
    },

    /// Level that fails structural validation
    #[error("invalid level: {0}")]
    InvalidLevel(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible operations.
pub type Result<T> = std::result::Result<T, ParkerError>;
