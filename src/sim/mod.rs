//! Deterministic simulation module
//!
//! The motion and collision-geometry engine. This module must stay pure:
//! - One kinematic step per tick, no internal timing
//! - No rendering, storage or input-device dependencies
//! - Same input state always yields the same output state

pub mod collision;
pub mod geometry;
pub mod kinematics;
pub mod shapes;
pub mod state;
pub mod tick;

pub use collision::{CrashCause, Outcome, crash_cause, detect_crash, detect_win, evaluate};
pub use geometry::{Interval, Quad, axes_of, intervals_overlap, project, rotate_point, sat_overlap};
pub use kinematics::{advance, advance_checked, steering_angle, throttle_magnitude, turn_radius};
pub use shapes::{Rect, rect_contains_point, rect_footprint, vehicle_footprint};
pub use state::{Gear, VehicleConfig, VehicleState};
pub use tick::{GearCommand, Session, TickInput, tick};
