//! SVG generation from computed arrows

use std::collections::BTreeSet;

use crate::container::ArrowContainer;
use crate::layout::{format_number, ArrowLabel, ArrowLayout, BoundingBox, EndShape};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    marker_ids: BTreeSet<String>,
    elements: Vec<String>,
    arrows: Vec<String>,
    labels: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            marker_ids: BTreeSet::new(),
            elements: vec![],
            arrows: vec![],
            labels: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &'static str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the marker definition an arrow refers to
    ///
    /// Arrows sharing a marker id share one definition; the first one wins.
    pub fn add_marker(&mut self, arrow: &ArrowLayout) {
        if !arrow.style.start_marker && !arrow.style.end_marker {
            return;
        }
        if !self.marker_ids.insert(arrow.marker_id.clone()) {
            return;
        }

        let orient = if arrow.style.start_marker {
            "auto-start-reverse"
        } else {
            "auto"
        };
        let color = escape_xml(&arrow.style.stroke_color);
        let id = escape_xml(&arrow.marker_id);

        let marker = match &arrow.style.end_shape {
            EndShape::Arrow {
                arrow_length,
                arrow_thickness,
            } => {
                let length = format_number(*arrow_length);
                let thickness = format_number(*arrow_thickness);
                let half = format_number(arrow_thickness / 2.0);
                format!(
                    r#"<marker id="{id}" markerWidth="{length}" markerHeight="{thickness}" refX="0" refY="{half}" orient="{orient}" markerUnits="strokeWidth"><path d="M0,0 L0,{thickness} L{length},{half} z" fill="{color}"/></marker>"#
                )
            }
            EndShape::Circle {
                radius,
                fill_color,
                stroke_color,
                stroke_width,
            } => {
                let r = format_number(*radius);
                let size = format_number(radius * 2.0);
                let fill = fill_color.as_deref().map(escape_xml).unwrap_or_else(|| color.clone());
                let stroke = stroke_color
                    .as_deref()
                    .map(escape_xml)
                    .unwrap_or_else(|| color.clone());
                let width = format_number(stroke_width.unwrap_or(0.0));
                format!(
                    r#"<marker id="{id}" markerWidth="{size}" markerHeight="{size}" refX="{r}" refY="{r}" orient="{orient}" markerUnits="strokeWidth"><circle cx="{r}" cy="{r}" r="{r}" fill="{fill}" stroke="{stroke}" stroke-width="{width}"/></marker>"#
                )
            }
        };
        self.defs.push(marker);
    }

    /// Add the `<path>` for one arrow
    pub fn add_arrow_path(&mut self, arrow: &ArrowLayout) {
        let prefix = self.prefix();
        let url = escape_xml(&arrow.marker_url());
        let mut markers = String::new();
        if arrow.style.start_marker {
            markers.push_str(&format!(r#" marker-start="{url}""#));
        }
        if arrow.style.end_marker {
            markers.push_str(&format!(r#" marker-end="{url}""#));
        }

        self.arrows.push(format!(
            r#"{}<path class="{}arrow" data-source="{}" data-target="{}" d="{}" style="{}"{}/>"#,
            self.indent_str(),
            prefix,
            escape_xml(&arrow.source_id),
            escape_xml(&arrow.target_id),
            arrow.d(),
            escape_xml(&arrow.style.to_css()),
            markers
        ));
    }

    /// Add a label box for an arrow
    pub fn add_label(&mut self, label: &ArrowLabel) {
        let prefix = self.prefix();
        let b = &label.bounds;
        self.labels.push(format!(
            r#"{}<foreignObject class="{}label" x="{}" y="{}" width="{}" height="{}" style="overflow: visible; pointer-events: none;"><div xmlns="http://www.w3.org/1999/xhtml" style="width: 100%; height: 100%; display: flex; align-items: center; justify-content: center;">{}</div></foreignObject>"#,
            self.indent_str(),
            prefix,
            format_number(b.x_label),
            format_number(b.y_label),
            format_number(b.label_width),
            format_number(b.label_height),
            escape_xml(&label.text)
        ));
    }

    /// Outline a measured element (debug mode)
    pub fn add_element_outline(&mut self, id: &str, bounds: &BoundingBox) {
        let prefix = self.prefix();
        let indent = self.indent_str();
        self.elements.push(format!(
            r##"{indent}<rect class="{prefix}element" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#999" stroke-dasharray="4,2"/>"##,
            format_number(bounds.x),
            format_number(bounds.y),
            format_number(bounds.width),
            format_number(bounds.height)
        ));
        self.elements.push(format!(
            r#"{indent}<text class="{prefix}element-id" x="{}" y="{}" font-size="10">{}</text>"#,
            format_number(bounds.x + 2.0),
            format_number(bounds.y + 10.0),
            escape_xml(id)
        ));
    }

    /// Add one arrow with its marker and label
    pub fn add_arrow(&mut self, arrow: &ArrowLayout) {
        self.add_marker(arrow);
        self.add_arrow_path(arrow);
        if let Some(label) = &arrow.label {
            self.add_label(label);
        }
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();
        let indent = self.indent_str();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            format_number(vb_x),
            format_number(vb_y),
            format_number(vb_w),
            format_number(vb_h)
        ));
        svg.push_str(nl);

        if !self.defs.is_empty() {
            svg.push_str(indent);
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(indent);
                svg.push_str(indent);
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(indent);
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        // Outlines below arrows, labels on top
        for line in self
            .elements
            .iter()
            .chain(&self.arrows)
            .chain(&self.labels)
        {
            svg.push_str(line);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render every arrow of a container to an SVG string
pub fn render_svg(container: &ArrowContainer, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    if config.debug {
        for (id, bounds) in container.measured_elements() {
            builder.add_element_outline(id, &bounds);
        }
    }

    let arrows = container.arrows();
    for arrow in &arrows {
        builder.add_arrow(arrow);
    }

    builder.build(container.content_bounds(&arrows).unwrap_or_default())
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{
        compute_geometry, AnchorSide, ArrowConfig, LabelBox, LineStyle, RelationStyle, Vector2,
    };
    use crate::relation::RelationDecl;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn sample_arrow(style: RelationStyle) -> ArrowLayout {
        let style = ArrowConfig::new()
            .with_stroke_color("blue")
            .resolve(&style);
        ArrowLayout {
            source_id: "a".to_string(),
            target_id: "b".to_string(),
            order: 0,
            geometry: compute_geometry(
                Vector2::new(10.0, 10.0),
                AnchorSide::Bottom,
                Vector2::new(30.0, 30.0),
                AnchorSide::Top,
                &style,
            ),
            marker_id: "arrow123123".to_string(),
            style,
            label: None,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_arrow_path_attributes() {
        let mut builder = SvgBuilder::new(SvgConfig::fragment());
        builder.add_arrow_path(&sample_arrow(RelationStyle::default()));
        assert_snapshot!(
            builder.arrows[0].as_str(),
            @r#"<path class="archer-arrow" data-source="a" data-target="b" d="M10,10 C10,10 30,10 30,10" style="fill: none; stroke: blue; stroke-width: 2;" marker-end="url(#arrow123123)"/>"#
        );
    }

    #[test]
    fn test_arrow_marker_definition() {
        let mut builder = SvgBuilder::new(SvgConfig::fragment());
        builder.add_marker(&sample_arrow(RelationStyle::default()));
        assert_snapshot!(
            builder.defs[0].as_str(),
            @r#"<marker id="arrow123123" markerWidth="10" markerHeight="6" refX="0" refY="3" orient="auto" markerUnits="strokeWidth"><path d="M0,0 L0,6 L10,3 z" fill="blue"/></marker>"#
        );
    }

    #[test]
    fn test_circle_marker_definition() {
        let style = RelationStyle {
            end_shape: Some(EndShape::Circle {
                radius: 3.0,
                fill_color: Some("white".to_string()),
                stroke_color: None,
                stroke_width: Some(1.0),
            }),
            ..RelationStyle::default()
        };
        let mut builder = SvgBuilder::new(SvgConfig::fragment());
        builder.add_marker(&sample_arrow(style));
        assert_snapshot!(
            builder.defs[0].as_str(),
            @r#"<marker id="arrow123123" markerWidth="6" markerHeight="6" refX="3" refY="3" orient="auto" markerUnits="strokeWidth"><circle cx="3" cy="3" r="3" fill="white" stroke="blue" stroke-width="1"/></marker>"#
        );
    }

    #[test]
    fn test_markers_deduplicated_and_skipped() {
        let mut builder = SvgBuilder::new(SvgConfig::fragment());
        builder.add_marker(&sample_arrow(RelationStyle::default()));
        builder.add_marker(&sample_arrow(RelationStyle::default()));
        assert_eq!(builder.defs.len(), 1);

        let mut bare = SvgBuilder::new(SvgConfig::fragment());
        bare.add_arrow(&sample_arrow(RelationStyle {
            end_marker: Some(false),
            ..RelationStyle::default()
        }));
        assert!(bare.defs.is_empty());
        assert!(!bare.arrows[0].contains("marker-end"));
    }

    #[test]
    fn test_start_marker() {
        let mut builder = SvgBuilder::new(SvgConfig::fragment());
        builder.add_arrow(&sample_arrow(RelationStyle {
            start_marker: Some(true),
            ..RelationStyle::default()
        }));
        assert!(builder.defs[0].contains(r#"orient="auto-start-reverse""#));
        assert!(builder.arrows[0].contains(r#"marker-start="url(#arrow123123)""#));
        assert!(builder.arrows[0].contains(r#"marker-end="url(#arrow123123)""#));
    }

    #[test]
    fn test_label_foreign_object() {
        let mut builder = SvgBuilder::new(SvgConfig::fragment());
        builder.add_label(&ArrowLabel {
            text: "a & b".to_string(),
            bounds: LabelBox {
                label_width: 5.0,
                label_height: 18.0,
                x_label: 10.0,
                y_label: 2.0,
            },
        });
        let label = &builder.labels[0];
        assert!(label.starts_with(r#"<foreignObject class="archer-label" x="10" y="2" width="5" height="18""#));
        assert!(label.contains(">a &amp; b</div>"));
    }

    #[test]
    fn test_build_document() {
        let mut builder = SvgBuilder::new(SvgConfig::fragment().with_viewbox_padding(0.0));
        builder.add_arrow(&sample_arrow(RelationStyle::default()));
        let svg = builder.build(BoundingBox::new(0.0, 0.0, 40.0, 40.0));
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 40 40"><defs><marker"#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_container() {
        let mut container = ArrowContainer::new(ArrowConfig::new().with_line_style(LineStyle::Angle));
        container.measure("a", BoundingBox::new(0.0, 0.0, 20.0, 20.0));
        container.measure("b", BoundingBox::new(100.0, 100.0, 20.0, 20.0));
        container.set_relations(
            "a",
            vec![RelationDecl::new("b", AnchorSide::Right, AnchorSide::Left).with_label("go")],
        );

        let svg = render_svg(&container, &SvgConfig::default().with_debug(true));

        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains("<defs>"));
        assert!(svg.contains(r#"d="M20,10 50,10 50,110 80,110""#));
        assert!(svg.contains("archer-label"));
        assert!(svg.contains(r#"class="archer-element""#));
        assert!(svg.contains(">b</text>"));
    }

    #[test]
    fn test_render_empty_container() {
        let svg = render_svg(&ArrowContainer::default(), &SvgConfig::fragment());
        assert_eq!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-20 -20 40 40"></svg>"#
        );
    }
}
