//! Rectangles and footprint builders
//!
//! Corners are always emitted in the same winding: (+x,+y), (-x,+y),
//! (-x,-y), (+x,-y) relative to the center before rotation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Quad, rotate_point};
use super::state::{VehicleConfig, VehicleState};
use crate::to_radians;

/// Axis-aligned rectangle, optionally rotated about its own center
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner x (before rotation)
    pub x: f32,
    /// Top-left corner y (before rotation)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, pivot at the rectangle center
    #[serde(default)]
    pub rotation: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn rotated(self, degrees: f32) -> Self {
        Self {
            rotation: degrees,
            ..self
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) / 2.0
    }

    #[inline]
    pub fn rotation_radians(&self) -> f32 {
        to_radians(self.rotation)
    }

    /// Zero or negative width/height
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Corners of a `2 * half`-sized rectangle centered at `center`, turned by `angle` radians
pub fn oriented_corners(center: Vec2, half: Vec2, angle: f32) -> Quad {
    [
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
    ]
    .map(|offset| rotate_point(center + offset, center, angle))
}

/// Vehicle rectangle: length along the heading, width across it
pub fn vehicle_footprint(state: &VehicleState, config: &VehicleConfig) -> Quad {
    oriented_corners(state.position, config.half_extents(), state.heading)
}

/// Obstacle or target rectangle, rotated about its center
pub fn rect_footprint(rect: &Rect) -> Quad {
    oriented_corners(rect.center(), rect.half_extents(), rect.rotation_radians())
}

/// Editor hit-test against the unrotated bounds; rotation is ignored
pub fn rect_contains_point(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}
