//! Core value types for the arrow geometry engine

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ArcherError;

/// A 2D point or direction in the container's coordinate space
///
/// All operations return a new value. Numeric inputs are not validated, so
/// NaN and infinities propagate through every method.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply_by_scalar(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }

    /// Rotate counter-clockwise (in a y-up frame) by `angle` radians
    pub fn rotate(self, angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Euclidean length
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(self, other: Vector2) -> f64 {
        other.subtract(self).length()
    }

}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        self.multiply_by_scalar(rhs)
    }
}

/// An element's position and size in the container's local space
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Vector2) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// The side of a rectangle an arrow attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Top,
    Bottom,
    Left,
    Right,
    Middle,
}

impl AnchorSide {
    /// Outward-facing direction of this side; `Middle` has no direction
    pub fn orientation(self) -> Vector2 {
        match self {
            AnchorSide::Top => Vector2::new(0.0, -1.0),
            AnchorSide::Bottom => Vector2::new(0.0, 1.0),
            AnchorSide::Left => Vector2::new(-1.0, 0.0),
            AnchorSide::Right => Vector2::new(1.0, 0.0),
            AnchorSide::Middle => Vector2::zero(),
        }
    }

    /// Top and bottom anchors attach along the vertical axis
    pub fn is_vertical(self) -> bool {
        matches!(self, AnchorSide::Top | AnchorSide::Bottom)
    }

    /// Left and right anchors attach along the horizontal axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, AnchorSide::Left | AnchorSide::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnchorSide::Top => "top",
            AnchorSide::Bottom => "bottom",
            AnchorSide::Left => "left",
            AnchorSide::Right => "right",
            AnchorSide::Middle => "middle",
        }
    }
}

impl FromStr for AnchorSide {
    type Err = ArcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(AnchorSide::Top),
            "bottom" => Ok(AnchorSide::Bottom),
            "left" => Ok(AnchorSide::Left),
            "right" => Ok(AnchorSide::Right),
            "middle" => Ok(AnchorSide::Middle),
            _ => Err(ArcherError::InvalidAnchor {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AnchorSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved anchor: where the arrow touches the element and which way it faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    pub point: Vector2,
    pub orientation: Vector2,
}

/// Shape of the line drawn between two anchors
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Single segment from start to end
    Straight,
    /// Cubic bezier leaving and entering perpendicular to the anchored edges
    #[default]
    Curve,
    /// Axis-aligned elbow
    Angle,
}

impl FromStr for LineStyle {
    type Err = ArcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(LineStyle::Straight),
            "curve" => Ok(LineStyle::Curve),
            "angle" => Ok(LineStyle::Angle),
            _ => Err(ArcherError::InvalidLineStyle {
                value: s.to_string(),
            }),
        }
    }
}

fn default_arrow_length() -> f64 {
    10.0
}

fn default_arrow_thickness() -> f64 {
    6.0
}

/// Marker drawn at the end of an arrow
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndShape {
    Arrow {
        #[serde(default = "default_arrow_length")]
        arrow_length: f64,
        #[serde(default = "default_arrow_thickness")]
        arrow_thickness: f64,
    },
    Circle {
        radius: f64,
        #[serde(default)]
        fill_color: Option<String>,
        #[serde(default)]
        stroke_color: Option<String>,
        #[serde(default)]
        stroke_width: Option<f64>,
    },
}

impl EndShape {
    pub fn arrow(arrow_length: f64, arrow_thickness: f64) -> Self {
        EndShape::Arrow {
            arrow_length,
            arrow_thickness,
        }
    }

    pub fn circle(radius: f64) -> Self {
        EndShape::Circle {
            radius,
            fill_color: None,
            stroke_color: None,
            stroke_width: None,
        }
    }

    /// Length of the marker along the path, in stroke-width units
    ///
    /// Markers are anchored at their base, so the line has to stop this far
    /// (scaled by the stroke width, halved by the trimmer) before the edge.
    pub fn marker_length(&self) -> f64 {
        match self {
            EndShape::Arrow { arrow_length, .. } => arrow_length * 2.0,
            EndShape::Circle { radius, .. } => radius * 2.0,
        }
    }
}

impl Default for EndShape {
    fn default() -> Self {
        EndShape::arrow(default_arrow_length(), default_arrow_thickness())
    }
}

/// Bounding rectangle for an arrow's text label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub label_width: f64,
    pub label_height: f64,
    pub x_label: f64,
    pub y_label: f64,
}
