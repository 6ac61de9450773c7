//! Vehicle state and physical constants
//!
//! `VehicleState` is replaced wholesale every tick; `VehicleConfig` is fixed
//! for the whole process.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ParkerError, Result};

/// Transmission position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gear {
    Drive,
    Reverse,
    /// Vehicle held at rest regardless of speed level
    #[default]
    Park,
}

impl Gear {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gear::Drive => "D",
            Gear::Reverse => "R",
            Gear::Park => "P",
        }
    }

    /// +1 forward, -1 backward, 0 held
    #[inline]
    pub fn direction(&self) -> f32 {
        match self {
            Gear::Drive => 1.0,
            Gear::Reverse => -1.0,
            Gear::Park => 0.0,
        }
    }
}

/// Mutable per-tick vehicle record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Center of the vehicle rectangle (arena-local)
    pub position: Vec2,
    /// Radians; 0 faces +x, increasing turns clockwise on screen (y down)
    pub heading: f32,
    /// Discrete steering position in `[-S, S]`, 0 = centered
    pub steering_step: i32,
    /// Signed speed along heading, derived from gear and speed level
    pub velocity: f32,
    /// Throttle index in `[1, L]`
    pub speed_level: i32,
    pub gear: Gear,
}

impl VehicleState {
    /// Vehicle parked at a pose, wheels centered, lowest speed level
    pub fn at_pose(position: Vec2, heading: f32) -> Self {
        Self {
            position,
            heading,
            steering_step: 0,
            velocity: 0.0,
            speed_level: 1,
            gear: Gear::Park,
        }
    }

    /// Whether the vehicle counts as stopped for the parking check
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.velocity.abs() <= PARKED_SPEED_TOLERANCE
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::at_pose(Vec2::ZERO, 0.0)
    }
}

/// Immutable physical constants of the vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Extent along the heading
    pub length: f32,
    /// Extent across the heading
    pub width: f32,
    /// Axle-to-axle distance, at most `length`
    pub wheelbase: f32,
    /// Full-lock steering angle (radians)
    pub max_steering_angle: f32,
    /// Number of discrete steps from center to full lock (`S`)
    pub steering_steps: i32,
    /// Ascending throttle magnitudes, one per speed level (`L` entries)
    pub speed_levels: Vec<f32>,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            length: CAR_LENGTH,
            width: CAR_WIDTH,
            wheelbase: CAR_WHEELBASE,
            max_steering_angle: MAX_STEERING_ANGLE,
            steering_steps: STEERING_STEPS,
            speed_levels: SPEED_LEVELS.to_vec(),
        }
    }
}

impl VehicleConfig {
    /// Highest speed level (`L`)
    #[inline]
    pub fn max_speed_level(&self) -> i32 {
        self.speed_levels.len() as i32
    }

    /// Half of (length, width)
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.length, self.width) / 2.0
    }

    /// Steering angle covered by one discrete step
    #[inline]
    pub fn angle_per_step(&self) -> f32 {
        self.max_steering_angle / self.steering_steps as f32
    }

    /// Reject constants the kinematic model cannot work with
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(ParkerError::InvalidConfig(msg));

        if !(self.length > 0.0 && self.width > 0.0) {
            return fail(format!(
                "dimensions must be positive, got {}x{}",
                self.length, self.width
            ));
        }
        if !(self.wheelbase > 0.0 && self.wheelbase <= self.length) {
            return fail(format!(
                "wheelbase {} must be in (0, length {}]",
                self.wheelbase, self.length
            ));
        }
        if !(self.max_steering_angle > 0.0 && self.max_steering_angle < std::f32::consts::FRAC_PI_2)
        {
            return fail(format!(
                "max steering angle {} must be in (0, pi/2)",
                self.max_steering_angle
            ));
        }
        if self.steering_steps < 1 {
            return fail(format!(
                "steering steps must be at least 1, got {}",
                self.steering_steps
            ));
        }
        if self.speed_levels.is_empty() {
            return fail("speed level table is empty".to_string());
        }
        if self.speed_levels.iter().any(|&s| s <= 0.0) {
            return fail("speed levels must be positive".to_string());
        }
        if self.speed_levels.windows(2).any(|w| w[1] <= w[0]) {
            return fail("speed levels must be strictly ascending".to_string());
        }
        Ok(())
    }
}
