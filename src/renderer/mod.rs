//! SVG renderer for computed arrows
//!
//! Emits one `<marker>` per distinct marker id, one `<path>` per arrow and a
//! `<foreignObject>` box for each label.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, SvgBuilder};
