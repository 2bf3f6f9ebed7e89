//! Arrow routing between two measured elements
//!
//! Data flows one way: anchors are resolved on both rectangles, the end is
//! trimmed for the marker, then the path and the optional label box are built
//! from the final endpoints.

use log::trace;

use crate::relation::Relation;

use super::anchor::resolve_anchor_with_gap;
use super::config::{ArrowConfig, ResolvedArrowStyle};
use super::label::label_box;
use super::path::{build_path, ArrowPath};
use super::trim::{trim_along_segment, trim_for_arrowhead};
use super::types::{AnchorSide, BoundingBox, LabelBox, LineStyle, Vector2};

/// Endpoints and path of one arrow after trimming
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowGeometry {
    pub start: Vector2,
    /// Endpoint after making room for the end marker
    pub end: Vector2,
    pub path: ArrowPath,
}

/// Text label attached to an arrow
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowLabel {
    pub text: String,
    pub bounds: LabelBox,
}

/// A fully computed arrow, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowLayout {
    pub source_id: String,
    pub target_id: String,
    pub order: i32,
    pub geometry: ArrowGeometry,
    pub marker_id: String,
    pub style: ResolvedArrowStyle,
    pub label: Option<ArrowLabel>,
}

impl ArrowLayout {
    /// SVG path `d` attribute
    pub fn d(&self) -> String {
        self.geometry.path.to_svg_d()
    }

    /// Reference to the marker definition, e.g. `url(#arrowab)`
    pub fn marker_url(&self) -> String {
        format!("url(#{})", self.marker_id)
    }
}

/// Compute the path between two already resolved anchor points
///
/// Each end that carries a marker is pulled back so the marker sits in front
/// of the element instead of over it. Both ends are trimmed against the
/// untrimmed opposite point.
pub fn compute_geometry(
    start: Vector2,
    starting_anchor: AnchorSide,
    end: Vector2,
    ending_anchor: AnchorSide,
    style: &ResolvedArrowStyle,
) -> ArrowGeometry {
    let trim = |point: Vector2, anchor: AnchorSide, other: Vector2| {
        let marker_length = style.end_shape.marker_length();
        match style.line_style {
            LineStyle::Straight => {
                trim_along_segment(other, point, marker_length, style.stroke_width)
            }
            LineStyle::Curve | LineStyle::Angle => {
                trim_for_arrowhead(point, marker_length, style.stroke_width, anchor)
            }
        }
    };

    let trimmed_end = if style.end_marker {
        trim(end, ending_anchor, start)
    } else {
        end
    };
    let trimmed_start = if style.start_marker {
        trim(start, starting_anchor, end)
    } else {
        start
    };

    ArrowGeometry {
        start: trimmed_start,
        end: trimmed_end,
        path: build_path(
            trimmed_start,
            starting_anchor,
            trimmed_end,
            ending_anchor,
            style.line_style,
        ),
    }
}

/// Route one relation between its measured source and target rectangles
pub fn route_arrow(
    source_bounds: &BoundingBox,
    target_bounds: &BoundingBox,
    relation: &Relation,
    config: &ArrowConfig,
) -> ArrowLayout {
    let style = config.resolve(&relation.style);

    let start = resolve_anchor_with_gap(
        source_bounds,
        relation.source.side,
        Some(relation.source.offset),
        config.offset,
    );
    let end = resolve_anchor_with_gap(
        target_bounds,
        relation.target.side,
        Some(relation.target.offset),
        config.offset,
    );

    let geometry = compute_geometry(
        start.point,
        relation.source.side,
        end.point,
        relation.target.side,
        &style,
    );

    let label = relation.label.as_ref().map(|text| ArrowLabel {
        text: text.clone(),
        bounds: label_box(geometry.start, geometry.end),
    });

    let layout = ArrowLayout {
        source_id: relation.source.element_id.clone(),
        target_id: relation.target.element_id.clone(),
        order: relation.order,
        marker_id: format!(
            "{}{}{}",
            config.marker_prefix, relation.source.element_id, relation.target.element_id
        ),
        geometry,
        style,
        label,
    };

    trace!(
        source = layout.source_id.as_str(),
        target = layout.target_id.as_str(),
        d = layout.d().as_str();
        "Routed arrow"
    );

    layout
}
