//! Archer Arrows - SVG arrows between rectangular elements
//!
//! This library turns measured rectangles and declared relations into SVG
//! arrow paths, arrowhead markers and label boxes.
//!
//! # Example
//!
//! ```rust
//! use archer_arrows::render;
//!
//! let svg = render(r#"
//! [container]
//!
//! [[elements]]
//! id = "a"
//! bounds = { x = 0, y = 0, width = 100, height = 40 }
//!
//! [[elements.relations]]
//! target_id = "b"
//! source_anchor = "bottom"
//! target_anchor = "top"
//!
//! [[elements]]
//! id = "b"
//! bounds = { x = 0, y = 200, width = 100, height = 40 }
//! "#).unwrap();
//! assert!(svg.contains("<path"));
//! ```

pub mod container;
pub mod error;
pub mod layout;
pub mod relation;
pub mod renderer;
pub mod scene;

pub use container::{ArrowContainer, ElementDecl};
pub use error::ArcherError;
pub use layout::{
    AnchorSide, ArrowConfig, ArrowLayout, ArrowPath, BoundingBox, EndShape, LabelBox, LineStyle,
    RelationStyle, Vector2,
};
pub use relation::{Relation, RelationDecl};
pub use renderer::{render_svg, SvgConfig};
pub use scene::{Scene, SceneError};

use log::{debug, info};
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while reading or parsing the scene
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Error while wiring elements into the container
    #[error("{0}")]
    Archer(#[from] ArcherError),
}

/// Render a TOML scene to SVG with default configuration
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &SvgConfig::default())
}

/// Render a TOML scene to SVG with custom output configuration
pub fn render_with_config(source: &str, config: &SvgConfig) -> Result<String, RenderError> {
    info!("Parsing scene");
    let scene = Scene::from_str(source)?;
    debug!(elements = scene.elements.len(); "Scene parsed");

    let container = scene.into_container()?;
    let svg = render_svg(&container, config);
    info!("SVG rendered successfully");

    Ok(svg)
}
