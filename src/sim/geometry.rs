//! Geometry kernel: point rotation and the Separating Axis Theorem
//!
//! Footprints are fixed 4-point convex polygons, so nothing here allocates.
//! Rotation direction is whatever the caller's frame makes it: in screen
//! space (y down) a positive angle turns clockwise on screen.

use glam::Vec2;

/// Four corners of an oriented rectangle in winding order
pub type Quad = [Vec2; 4];

/// Closed 1-D interval produced by projecting a polygon onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Boundary-inclusive overlap test
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        intervals_overlap(*self, *other)
    }
}

/// Rotate `p` about `center` by `angle` radians
#[inline]
pub fn rotate_point(p: Vec2, center: Vec2, angle: f32) -> Vec2 {
    center + Vec2::from_angle(angle).rotate(p - center)
}

/// One (unnormalized) normal per edge, edge i running from `polygon[i]` to `polygon[i + 1]`
pub fn edge_normals(polygon: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| {
        let edge = polygon[i] - polygon[(i + 1) % n];
        Vec2::new(-edge.y, edge.x)
    })
}

/// The two distinct separating-axis candidates of a rectangle
///
/// Opposite edges of a rectangle are parallel, so the normals of the first
/// two edges cover all four.
#[inline]
pub fn axes_of(quad: &Quad) -> [Vec2; 2] {
    let mut normals = edge_normals(quad);
    let first = normals.next().unwrap_or(Vec2::ZERO);
    let second = normals.next().unwrap_or(Vec2::ZERO);
    [first, second]
}

/// Project every vertex onto `axis` and return the covered interval
pub fn project(polygon: &[Vec2], axis: Vec2) -> Interval {
    polygon.iter().fold(
        Interval {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        },
        |acc, p| {
            let d = p.dot(axis);
            Interval {
                min: acc.min.min(d),
                max: acc.max.max(d),
            }
        },
    )
}

/// `a.max >= b.min && b.max >= a.min`; touching intervals overlap
#[inline]
pub fn intervals_overlap(a: Interval, b: Interval) -> bool {
    a.max >= b.min && b.max >= a.min
}

/// Separating Axis Theorem test for two rectangles
///
/// Returns false as soon as one axis separates the projections. Shapes that
/// only touch along an edge or at a corner count as overlapping.
pub fn sat_overlap(a: &Quad, b: &Quad) -> bool {
    axes_of(a)
        .into_iter()
        .chain(axes_of(b))
        .all(|axis| intervals_overlap(project(a, axis), project(b, axis)))
}
