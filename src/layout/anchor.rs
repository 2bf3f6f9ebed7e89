//! Anchor resolution: named side + relative offset -> absolute point

use super::types::{AnchorPoint, AnchorSide, BoundingBox, Vector2};

/// Relative position along an edge used when none is given
pub const DEFAULT_ANCHOR_OFFSET: f64 = 0.5;

/// Resolve an anchor on `bounds`
///
/// `offset` runs along the chosen edge from the top/left corner (0.0) to the
/// bottom/right corner (1.0). Values outside that range extrapolate past the
/// corner; they are not clamped. `Middle` ignores the offset.
pub fn resolve_anchor(bounds: &BoundingBox, side: AnchorSide, offset: Option<f64>) -> AnchorPoint {
    let offset = offset.unwrap_or(DEFAULT_ANCHOR_OFFSET);
    let point = match side {
        AnchorSide::Top => Vector2::new(bounds.x + bounds.width * offset, bounds.y),
        AnchorSide::Bottom => Vector2::new(bounds.x + bounds.width * offset, bounds.bottom()),
        AnchorSide::Left => Vector2::new(bounds.x, bounds.y + bounds.height * offset),
        AnchorSide::Right => Vector2::new(bounds.right(), bounds.y + bounds.height * offset),
        AnchorSide::Middle => bounds.center(),
    };

    AnchorPoint {
        point,
        orientation: side.orientation(),
    }
}

/// Resolve an anchor and push it `distance` units outward from its edge
pub fn resolve_anchor_with_gap(
    bounds: &BoundingBox,
    side: AnchorSide,
    offset: Option<f64>,
    distance: f64,
) -> AnchorPoint {
    let anchor = resolve_anchor(bounds, side, offset);
    AnchorPoint {
        point: anchor.point + anchor.orientation * distance,
        ..anchor
    }
}
