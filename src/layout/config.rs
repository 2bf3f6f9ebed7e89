//! Configuration for arrow drawing
//!
//! [`ArrowConfig`] holds the container-wide defaults. Each relation may carry
//! a [`RelationStyle`] whose set fields override them; the merge produces a
//! [`ResolvedArrowStyle`] with every value filled in.

use serde::Deserialize;

use super::path::format_number;
use super::types::{EndShape, LineStyle};

/// Container-wide arrow settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArrowConfig {
    /// Stroke color of the arrow line and the arrowhead fill
    pub stroke_color: String,

    /// Stroke width of the arrow line; markers scale with it
    pub stroke_width: f64,

    /// Optional SVG dash pattern, e.g. "5,5"
    pub stroke_dasharray: Option<String>,

    pub line_style: LineStyle,

    pub end_shape: EndShape,

    /// Gap between an element's edge and the arrow endpoint
    pub offset: f64,

    /// Draw the marker at the start of the line as well
    pub start_marker: bool,

    /// Draw the marker at the end of the line
    pub end_marker: bool,

    /// Prefix for generated marker ids
    pub marker_prefix: String,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            stroke_color: "#f00".to_string(),
            stroke_width: 2.0,
            stroke_dasharray: None,
            line_style: LineStyle::Curve,
            end_shape: EndShape::default(),
            offset: 0.0,
            start_marker: false,
            end_marker: true,
            marker_prefix: "arrow".to_string(),
        }
    }
}

impl ArrowConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn with_end_shape(mut self, shape: EndShape) -> Self {
        self.end_shape = shape;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_marker_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.marker_prefix = prefix.into();
        self
    }

    /// Merge a relation's overrides on top of these defaults
    pub fn resolve(&self, style: &RelationStyle) -> ResolvedArrowStyle {
        ResolvedArrowStyle {
            stroke_color: style
                .stroke_color
                .clone()
                .unwrap_or_else(|| self.stroke_color.clone()),
            stroke_width: style.stroke_width.unwrap_or(self.stroke_width),
            stroke_dasharray: style
                .stroke_dasharray
                .clone()
                .or_else(|| self.stroke_dasharray.clone()),
            line_style: style.line_style.unwrap_or(self.line_style),
            end_shape: style
                .end_shape
                .clone()
                .unwrap_or_else(|| self.end_shape.clone()),
            start_marker: style.start_marker.unwrap_or(self.start_marker),
            end_marker: style.end_marker.unwrap_or(self.end_marker),
        }
    }
}

/// Per-relation overrides; unset fields fall back to the container's config
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RelationStyle {
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<String>,
    pub line_style: Option<LineStyle>,
    pub end_shape: Option<EndShape>,
    pub start_marker: Option<bool>,
    pub end_marker: Option<bool>,
}

/// Fully resolved drawing attributes for one arrow
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArrowStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<String>,
    pub line_style: LineStyle,
    pub end_shape: EndShape,
    pub start_marker: bool,
    pub end_marker: bool,
}

impl ResolvedArrowStyle {
    /// Inline `style` attribute for the arrow's `<path>`
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "fill: none; stroke: {}; stroke-width: {};",
            self.stroke_color,
            format_number(self.stroke_width)
        );
        if let Some(dash) = &self.stroke_dasharray {
            css.push_str(&format!(" stroke-dasharray: {};", dash));
        }
        css
    }
}
