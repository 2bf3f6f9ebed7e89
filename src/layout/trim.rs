//! Endpoint trimming so the arrowhead marker fits before the target edge

use super::types::{AnchorSide, Vector2};

/// Pull `end` back along the ending anchor's axis
///
/// The line stops `arrow_length * stroke_width / 2` units short of `end`,
/// moving only on the anchor's axis (y for top/bottom, x for left/right).
/// `Middle` has no axis, so the point is returned as is.
pub fn trim_for_arrowhead(
    end: Vector2,
    arrow_length: f64,
    stroke_width: f64,
    ending_anchor: AnchorSide,
) -> Vector2 {
    let distance = arrow_length * stroke_width / 2.0;
    end.add(ending_anchor.orientation().multiply_by_scalar(distance))
}

/// Pull `end` back toward `start` along the segment itself
///
/// Straight arrows point along the segment rather than the anchor axis, so
/// the marker has to be cleared in that direction. The shift is the trim
/// distance laid on the x axis and rotated onto the segment's angle, which
/// keeps coordinates identical to what a browser computes. A zero-length
/// segment has no direction and is left untouched.
pub fn trim_along_segment(
    start: Vector2,
    end: Vector2,
    arrow_length: f64,
    stroke_width: f64,
) -> Vector2 {
    let back = start.subtract(end);
    if back == Vector2::zero() {
        return end;
    }
    let angle = back.y.atan2(back.x);
    end.add(Vector2::new(arrow_length * stroke_width / 2.0, 0.0).rotate(angle))
}
