//! Scene files: containers, elements and relations declared in TOML
//!
//! ```toml
//! [container]
//! stroke_color = "blue"
//! line_style = "angle"
//!
//! [[elements]]
//! id = "client"
//! bounds = { x = 0, y = 0, width = 120, height = 40 }
//!
//! [[elements.relations]]
//! target_id = "server"
//! source_anchor = "bottom"
//! target_anchor = "top"
//! label = "HTTP"
//! ```
//!
//! An element without `bounds` has not been measured yet; its arrows are
//! left out until it is.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::container::{ArrowContainer, ElementDecl};
use crate::error::ArcherError;
use crate::layout::ArrowConfig;

/// Errors that can occur when loading or parsing scene files
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A parsed scene, not yet wired into a container
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    /// Arrow container settings; required as soon as any element is declared
    #[serde(default)]
    pub container: Option<ArrowConfig>,
    #[serde(default)]
    pub elements: Vec<ElementDecl>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    /// Register every element with the scene's container
    pub fn into_container(self) -> Result<ArrowContainer, ArcherError> {
        let mut container = self.container.map(ArrowContainer::new);
        for element in self.elements {
            element.attach(container.as_mut())?;
        }
        Ok(container.unwrap_or_default())
    }
}
