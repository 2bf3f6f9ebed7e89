//! Geometry engine for arrows between rectangles
//!
//! Everything here is a pure function of its inputs: anchors are resolved on
//! measured rectangles, the end is trimmed for the marker, and the path and
//! label box are derived from the resulting endpoints.

pub mod anchor;
pub mod config;
pub mod control;
pub mod label;
pub mod path;
pub mod routing;
pub mod trim;
pub mod types;

pub use anchor::{resolve_anchor, resolve_anchor_with_gap};
pub use config::{ArrowConfig, RelationStyle, ResolvedArrowStyle};
pub use control::{ending_control_point, starting_control_point};
pub use label::label_box;
pub use path::{build_path, elbow_points, format_number, ArrowPath};
pub use routing::{compute_geometry, route_arrow, ArrowGeometry, ArrowLabel, ArrowLayout};
pub use trim::{trim_along_segment, trim_for_arrowhead};
pub use types::*;
