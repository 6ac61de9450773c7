//! Crash and parking detection
//!
//! Runs after every kinematic step against the static level geometry.
//! Overlap is only detected, never resolved.

use glam::Vec2;

use super::geometry::{Quad, rotate_point, sat_overlap};
use super::shapes::{Rect, rect_footprint, vehicle_footprint};
use super::state::{VehicleConfig, VehicleState};
use crate::level::{Bounds, Level};

/// Result of evaluating one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Running,
    /// Terminal until the session is reset
    Crashed,
    /// Terminal until the session is reset
    Won,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Running)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Running => "",
            Outcome::Crashed => "CRASH!",
            Outcome::Won => "PARKED!",
        }
    }
}

/// What the vehicle hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// A footprint corner left the arena
    OutOfBounds,
    /// Index into `Level::obstacles` of the first overlapping obstacle
    Obstacle(usize),
}

/// Any corner outside `[0, width] x [0, height]`
pub fn footprint_out_of_bounds(footprint: &Quad, bounds: &Bounds) -> bool {
    footprint.iter().any(|&p| !bounds.contains(p))
}

/// First reason the vehicle is crashed, checking the arena before obstacles
pub fn crash_cause(
    state: &VehicleState,
    config: &VehicleConfig,
    level: &Level,
) -> Option<CrashCause> {
    let footprint = vehicle_footprint(state, config);

    if footprint_out_of_bounds(&footprint, &level.bounds) {
        return Some(CrashCause::OutOfBounds);
    }

    level
        .obstacles
        .iter()
        .position(|obstacle| sat_overlap(&footprint, &rect_footprint(obstacle)))
        .map(CrashCause::Obstacle)
}

/// Vehicle touches an obstacle or leaves the arena
#[inline]
pub fn detect_crash(state: &VehicleState, config: &VehicleConfig, level: &Level) -> bool {
    crash_cause(state, config, level).is_some()
}

/// `point` expressed in the rectangle's unrotated frame, origin at its center
#[inline]
pub fn to_rect_local(point: Vec2, rect: &Rect) -> Vec2 {
    let center = rect.center();
    rotate_point(point, center, -rect.rotation_radians()) - center
}

/// Every corner inside (or on the edge of) the rotated rectangle
pub fn footprint_within(footprint: &Quad, rect: &Rect) -> bool {
    let half = rect.half_extents();
    footprint.iter().all(|&p| {
        let local = to_rect_local(p, rect);
        local.x.abs() <= half.x && local.y.abs() <= half.y
    })
}

/// Vehicle stopped and fully contained in the target zone
pub fn detect_win(state: &VehicleState, config: &VehicleConfig, target: &Rect) -> bool {
    state.is_at_rest() && footprint_within(&vehicle_footprint(state, config), target)
}

/// Crash takes precedence over a win on the same tick
pub fn evaluate(state: &VehicleState, config: &VehicleConfig, level: &Level) -> Outcome {
    if detect_crash(state, config, level) {
        Outcome::Crashed
    } else if detect_win(state, config, &level.target) {
        Outcome::Won
    } else {
        Outcome::Running
    }
}
