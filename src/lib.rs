//! Precision Parker - a top-down parking puzzle
//!
//! Core modules:
//! - `sim`: Deterministic motion and collision-geometry engine
//! - `level`: Level records, built-in levels and user level packs
//! - `settings`: Runtime configuration
//! - `error`: Crate error type

pub mod error;
pub mod level;
pub mod settings;
pub mod sim;

pub use error::{ParkerError, Result};
pub use level::{Bounds, Level, LevelPack, StartPose};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::FRAC_PI_4;

    /// Vehicle footprint along its heading (pixels)
    pub const CAR_LENGTH: f32 = 46.0;
    /// Vehicle footprint across its heading (pixels)
    pub const CAR_WIDTH: f32 = 24.0;
    /// Distance between axles (pixels)
    pub const CAR_WHEELBASE: f32 = 28.0;
    /// Full-lock steering angle (radians, 45 degrees)
    pub const MAX_STEERING_ANGLE: f32 = FRAC_PI_4;
    /// Discrete steering steps from center to full lock
    pub const STEERING_STEPS: i32 = 10;
    /// Throttle magnitudes per speed level (pixels/tick), ascending
    pub const SPEED_LEVELS: [f32; 5] = [0.4, 0.7, 1.0, 1.3, 1.6];

    /// Below this speed or steering angle the kinematic model treats the value as zero
    pub const MOTION_EPSILON: f32 = 0.001;
    /// A vehicle slower than this counts as parked for the win check
    pub const PARKED_SPEED_TOLERANCE: f32 = 0.1;
}

/// Convert degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
