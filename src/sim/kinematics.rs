//! Kinematic bicycle model
//!
//! One call to [`advance`] is one simulation tick. Velocity is recomputed
//! from gear and speed level every tick; there is no acceleration ramp.

use glam::Vec2;

use super::state::{Gear, VehicleConfig, VehicleState};
use crate::consts::MOTION_EPSILON;
use crate::error::{ParkerError, Result};

/// Throttle magnitude for a speed level, clamped into the table
#[inline]
pub fn throttle_magnitude(speed_level: i32, config: &VehicleConfig) -> f32 {
    let max_level = config.max_speed_level().max(1);
    let index = (speed_level.clamp(1, max_level) - 1) as usize;
    config.speed_levels.get(index).copied().unwrap_or(0.0)
}

/// Signed velocity for a gear at a speed level
#[inline]
pub fn target_velocity(gear: Gear, speed_level: i32, config: &VehicleConfig) -> f32 {
    match gear {
        Gear::Park => 0.0,
        Gear::Drive | Gear::Reverse => gear.direction() * throttle_magnitude(speed_level, config),
    }
}

/// Front-wheel angle for a discrete steering step (radians)
///
/// The step is trusted to already be within `[-S, S]`.
#[inline]
pub fn steering_angle(steering_step: i32, config: &VehicleConfig) -> f32 {
    steering_step as f32 * config.angle_per_step()
}

/// Signed turn radius for a steering angle, `None` when driving straight
#[inline]
pub fn turn_radius(steering_angle: f32, config: &VehicleConfig) -> Option<f32> {
    if steering_angle.abs() <= MOTION_EPSILON {
        None
    } else {
        Some(config.wheelbase / steering_angle.tan())
    }
}

/// Advance the vehicle by one tick
///
/// Position moves along the pre-update heading, then the heading turns by
/// `velocity / turn_radius`. Heading is left unwrapped.
pub fn advance(state: &VehicleState, config: &VehicleConfig) -> VehicleState {
    let mut next = *state;
    next.velocity = target_velocity(state.gear, state.speed_level, config);

    if next.velocity.abs() <= MOTION_EPSILON {
        return next;
    }

    next.position += next.velocity * Vec2::from_angle(state.heading);

    if let Some(radius) = turn_radius(steering_angle(state.steering_step, config), config) {
        next.heading += next.velocity / radius;
    }

    next
}

/// [`advance`] with explicit input preconditions
///
/// Fails instead of trusting the steering step or clamping the speed level.
pub fn advance_checked(state: &VehicleState, config: &VehicleConfig) -> Result<VehicleState> {
    let max_step = config.steering_steps;
    if !(-max_step..=max_step).contains(&state.steering_step) {
        return Err(ParkerError::SteeringOutOfRange {
            step: state.steering_step,
            max: max_step,
        });
    }
    let max_level = config.max_speed_level();
    if !(1..=max_level).contains(&state.speed_level) {
        return Err(ParkerError::SpeedLevelOutOfRange {
            level: state.speed_level,
            max: max_level,
        });
    }
    Ok(advance(state, config))
}
