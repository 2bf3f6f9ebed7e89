//! Relation descriptors: declared arrows between elements
//!
//! A [`RelationDecl`] is what an element declares (optional fields as
//! written). Attaching it to a source element fills every default and yields
//! a [`Relation`] the geometry engine can use directly.

use serde::Deserialize;

use crate::layout::anchor::DEFAULT_ANCHOR_OFFSET;
use crate::layout::{AnchorSide, RelationStyle};

/// An arrow as declared on its source element
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelationDecl {
    pub target_id: String,
    pub source_anchor: AnchorSide,
    pub target_anchor: AnchorSide,
    #[serde(default)]
    pub source_offset: Option<f64>,
    #[serde(default)]
    pub target_offset: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub style: Option<RelationStyle>,
    #[serde(default)]
    pub order: Option<i32>,
}

impl RelationDecl {
    pub fn new(
        target_id: impl Into<String>,
        source_anchor: AnchorSide,
        target_anchor: AnchorSide,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            source_anchor,
            target_anchor,
            source_offset: None,
            target_offset: None,
            label: None,
            style: None,
            order: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: RelationStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_offsets(mut self, source: f64, target: f64) -> Self {
        self.source_offset = Some(source);
        self.target_offset = Some(target);
        self
    }

    /// Bind this declaration to its source element, filling defaults
    pub fn into_relation(self, source_id: impl Into<String>) -> Relation {
        Relation {
            source: AnchorSpec {
                element_id: source_id.into(),
                side: self.source_anchor,
                offset: self.source_offset.unwrap_or(DEFAULT_ANCHOR_OFFSET),
            },
            target: AnchorSpec {
                element_id: self.target_id,
                side: self.target_anchor,
                offset: self.target_offset.unwrap_or(DEFAULT_ANCHOR_OFFSET),
            },
            label: self.label,
            style: self.style.unwrap_or_default(),
            order: self.order.unwrap_or(0),
        }
    }
}

/// One end of a relation
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSpec {
    pub element_id: String,
    pub side: AnchorSide,
    pub offset: f64,
}

/// A relation with every default filled in
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub source: AnchorSpec,
    pub target: AnchorSpec,
    pub label: Option<String>,
    pub style: RelationStyle,
    pub order: i32,
}

/// Expand an element's declarations into source-to-target relations
pub fn source_to_target(source_id: &str, relations: Vec<RelationDecl>) -> Vec<Relation> {
    relations
        .into_iter()
        .map(|decl| decl.into_relation(source_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LineStyle;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_filled() {
        let relation = RelationDecl::new("b", AnchorSide::Bottom, AnchorSide::Top).into_relation("a");
        assert_eq!(
            relation,
            Relation {
                source: AnchorSpec {
                    element_id: "a".to_string(),
                    side: AnchorSide::Bottom,
                    offset: 0.5,
                },
                target: AnchorSpec {
                    element_id: "b".to_string(),
                    side: AnchorSide::Top,
                    offset: 0.5,
                },
                label: None,
                style: RelationStyle::default(),
                order: 0,
            }
        );
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let style = RelationStyle {
            line_style: Some(LineStyle::Angle),
            ..RelationStyle::default()
        };
        let relation = RelationDecl::new("b", AnchorSide::Left, AnchorSide::Right)
            .with_offsets(0.0, 1.25)
            .with_label("calls")
            .with_style(style.clone())
            .with_order(3)
            .into_relation("a");
        assert_eq!(relation.source.offset, 0.0);
        assert_eq!(relation.target.offset, 1.25);
        assert_eq!(relation.label.as_deref(), Some("calls"));
        assert_eq!(relation.style, style);
        assert_eq!(relation.order, 3);
    }

    #[test]
    fn test_source_to_target_shares_source() {
        let relations = source_to_target(
            "hub",
            vec![
                RelationDecl::new("x", AnchorSide::Right, AnchorSide::Left),
                RelationDecl::new("y", AnchorSide::Bottom, AnchorSide::Top).with_order(-1),
            ],
        );
        assert_eq!(relations.len(), 2);
        assert!(relations.iter().all(|r| r.source.element_id == "hub"));
        assert_eq!(relations[1].target.element_id, "y");
        assert_eq!(relations[1].order, -1);
    }

    #[test]
    fn test_deserialize_decl() {
        let decl: RelationDecl = toml::from_str(
            r#"
target_id = "db"
source_anchor = "right"
target_anchor = "middle"
label = "reads"

[style]
stroke_color = "teal"
"#,
        )
        .expect("Should parse");
        assert_eq!(decl.target_id, "db");
        assert_eq!(decl.target_anchor, AnchorSide::Middle);
        assert_eq!(decl.order, None);
        assert_eq!(
            decl.style.and_then(|s| s.stroke_color).as_deref(),
            Some("teal")
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_anchor() {
        let result: Result<RelationDecl, _> = toml::from_str(
            r#"
target_id = "db"
source_anchor = "center"
target_anchor = "top"
"#,
        );
        assert!(result.is_err());
    }
}
