//! Bezier control points that keep curves perpendicular to the anchored edges
//!
//! Each control point sits halfway between the two endpoints, but only on the
//! anchor's own axis: a top/bottom anchor moves along y and keeps its x, a
//! left/right anchor moves along x and keeps its y. The curve therefore leaves
//! and enters the element straight out of the connected edge.

use super::types::{AnchorSide, Vector2};

/// Control point attached to the start of the arrow
pub fn starting_control_point(start: Vector2, end: Vector2, starting_anchor: AnchorSide) -> Vector2 {
    axis_midpoint(start, end, starting_anchor)
}

/// Control point attached to the end of the arrow
///
/// Mirrors [`starting_control_point`] computed from the opposite end.
pub fn ending_control_point(start: Vector2, end: Vector2, ending_anchor: AnchorSide) -> Vector2 {
    axis_midpoint(end, start, ending_anchor)
}

fn axis_midpoint(from: Vector2, to: Vector2, side: AnchorSide) -> Vector2 {
    match side {
        AnchorSide::Top | AnchorSide::Bottom => Vector2::new(from.x, from.y + (to.y - from.y) / 2.0),
        AnchorSide::Left | AnchorSide::Right => Vector2::new(from.x + (to.x - from.x) / 2.0, from.y),
        AnchorSide::Middle => from,
    }
}
