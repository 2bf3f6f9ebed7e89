//! Output options for the arrow overlay

/// How the arrow overlay is written out
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Space added around the arrows and elements on every side
    pub viewbox_padding: f64,

    /// Emit an XML declaration so the output is a file on its own
    pub standalone: bool,

    /// One element per line, nested elements indented
    pub pretty_print: bool,

    /// Prefix for the `arrow`, `label` and `element` CSS classes
    pub class_prefix: Option<String>,

    /// Outline measured elements and print their ids
    pub debug: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 20.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("archer-".to_string()),
            debug: false,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-line `<svg>` without XML declaration, for inlining the
    /// overlay into an existing HTML or SVG document
    pub fn fragment() -> Self {
        Self {
            standalone: false,
            pretty_print: false,
            ..Self::default()
        }
    }

    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
