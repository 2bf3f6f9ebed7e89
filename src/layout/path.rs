//! Path assembly for the three line styles
//!
//! Converts endpoints and anchor sides into an [`ArrowPath`] and from there
//! into an SVG path `d` attribute.

use super::control::{ending_control_point, starting_control_point};
use super::types::{AnchorSide, LineStyle, Vector2};

/// A resolved arrow path ready for SVG rendering
#[derive(Debug, Clone, PartialEq)]
pub enum ArrowPath {
    /// One segment from start to end
    Straight { start: Vector2, end: Vector2 },
    /// Cubic bezier
    Curve {
        start: Vector2,
        control1: Vector2,
        control2: Vector2,
        end: Vector2,
    },
    /// Axis-aligned polyline: start, bends, end
    Angle(Vec<Vector2>),
}

impl ArrowPath {
    pub fn start(&self) -> Option<Vector2> {
        match self {
            ArrowPath::Straight { start, .. } | ArrowPath::Curve { start, .. } => Some(*start),
            ArrowPath::Angle(points) => points.first().copied(),
        }
    }

    pub fn end(&self) -> Option<Vector2> {
        match self {
            ArrowPath::Straight { end, .. } | ArrowPath::Curve { end, .. } => Some(*end),
            ArrowPath::Angle(points) => points.last().copied(),
        }
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        match self {
            ArrowPath::Straight { start, end } => {
                format!("M{} {}", format_point(*start), format_point(*end))
            }
            ArrowPath::Curve {
                start,
                control1,
                control2,
                end,
            } => format!(
                "M{} C{} {} {}",
                format_point(*start),
                format_point(*control1),
                format_point(*control2),
                format_point(*end)
            ),
            ArrowPath::Angle(points) => {
                let Some((first, rest)) = points.split_first() else {
                    return String::new();
                };
                let mut d = format!("M{}", format_point(*first));
                for point in rest {
                    d.push(' ');
                    d.push_str(&format_point(*point));
                }
                d
            }
        }
    }
}

/// Build the path for one arrow
///
/// `end` is expected to be already trimmed for the arrowhead.
pub fn build_path(
    start: Vector2,
    starting_anchor: AnchorSide,
    end: Vector2,
    ending_anchor: AnchorSide,
    style: LineStyle,
) -> ArrowPath {
    match style {
        LineStyle::Straight => ArrowPath::Straight { start, end },
        LineStyle::Curve => ArrowPath::Curve {
            start,
            control1: starting_control_point(start, end, starting_anchor),
            control2: ending_control_point(start, end, ending_anchor),
            end,
        },
        LineStyle::Angle => ArrowPath::Angle(elbow_points(
            start,
            starting_anchor,
            end,
            ending_anchor,
        )),
    }
}

/// Axis along which an anchor leaves its element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

fn anchor_axis(side: AnchorSide) -> Option<Axis> {
    if side.is_vertical() {
        Some(Axis::Vertical)
    } else if side.is_horizontal() {
        Some(Axis::Horizontal)
    } else {
        None
    }
}

fn opposite(axis: Axis) -> Axis {
    match axis {
        Axis::Vertical => Axis::Horizontal,
        Axis::Horizontal => Axis::Vertical,
    }
}

/// Compute an elbow polyline whose segments are all horizontal or vertical
///
/// A `Middle` anchor has no axis of its own and takes the one perpendicular
/// to the other end, giving a single bend.
pub fn elbow_points(
    start: Vector2,
    starting_anchor: AnchorSide,
    end: Vector2,
    ending_anchor: AnchorSide,
) -> Vec<Vector2> {
    let (start_axis, end_axis) = match (anchor_axis(starting_anchor), anchor_axis(ending_anchor)) {
        (Some(s), Some(e)) => (s, e),
        (Some(s), None) => (s, opposite(s)),
        (None, Some(e)) => (opposite(e), e),
        (None, None) => (Axis::Horizontal, Axis::Vertical),
    };

    let mut points = vec![start];
    match (start_axis, end_axis) {
        (Axis::Vertical, Axis::Vertical) => {
            let mid_y = start.y + (end.y - start.y) / 2.0;
            points.push(Vector2::new(start.x, mid_y));
            points.push(Vector2::new(end.x, mid_y));
        }
        (Axis::Horizontal, Axis::Horizontal) => {
            let mid_x = start.x + (end.x - start.x) / 2.0;
            points.push(Vector2::new(mid_x, start.y));
            points.push(Vector2::new(mid_x, end.y));
        }
        (Axis::Vertical, Axis::Horizontal) => points.push(Vector2::new(start.x, end.y)),
        (Axis::Horizontal, Axis::Vertical) => points.push(Vector2::new(end.x, start.y)),
    }
    points.push(end);

    // Collapse zero-length segments so marker orientation stays defined
    points.dedup();
    points
}

fn format_point(point: Vector2) -> String {
    format!("{},{}", format_number(point.x), format_number(point.y))
}

/// Format a coordinate the way browsers serialize numbers
///
/// Shortest round-trip decimal, no trailing `.0` on integers, `-0` printed as
/// `0`, and `NaN`/`Infinity` spelled out. Magnitudes from 1e21 up and below
/// 1e-6 switch to exponent notation with an explicit sign (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}
