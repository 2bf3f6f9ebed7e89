//! Error types for arrow registration and descriptor parsing

use thiserror::Error;

/// Errors raised while wiring elements and relations into a container
///
/// Geometry itself never fails; these cover configuration mistakes only.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArcherError {
    /// An element was declared without an enclosing arrow container
    #[error(
        "could not find an arrow container for element '{element}': \
         declare the element inside an arrow container"
    )]
    MissingContainer { element: String },

    /// Two elements registered under the same id
    #[error("element '{id}' is already registered in this container")]
    DuplicateElement { id: String },

    #[error("invalid anchor '{value}' (expected one of: top, bottom, left, right, middle)")]
    InvalidAnchor { value: String },

    #[error("invalid line style '{value}' (expected one of: straight, curve, angle)")]
    InvalidLineStyle { value: String },
}

impl ArcherError {
    /// Create a missing container error for the given element
    pub fn missing_container(element: impl Into<String>) -> Self {
        Self::MissingContainer {
            element: element.into(),
        }
    }

    /// Create a duplicate element error
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateElement { id: id.into() }
    }
}
