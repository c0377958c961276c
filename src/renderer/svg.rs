//! SVG generation from draw entries

use log::debug;

use crate::figure::BoundingBox;
use crate::interpret::DrawEntry;

use super::SvgConfig;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Build an SVG document incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    /// Add one element's markup
    pub fn add_element(&mut self, markup: String) {
        self.elements.push(format!("{}{}", self.indent_str(), markup));
    }

    /// Build the final SVG string with the given canvas
    pub fn build(self, canvas: BoundingBox) -> String {
        let mut svg = String::from("<svg");
        if self.config.namespace {
            svg.push_str(&format!(r#" xmlns="{}""#, SVG_NAMESPACE));
        }
        svg.push_str(&format!(r#" viewBox="{}">"#, canvas.view_box()));
        svg.push('\n');

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push('\n');
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Union of the origin and every entry's bounding box
///
/// The accumulator is seeded with the zero box, so the origin is always part
/// of the canvas and an empty drawing yields `0 0 0 0`.
pub fn canvas(entries: &[DrawEntry]) -> BoundingBox {
    let mut canvas = BoundingBox::zero();
    for entry in entries {
        canvas.include(&entry.figure.bounding_box());
    }
    canvas
}

/// Render draw entries, already in paint order, to an SVG document
pub fn render_svg(entries: &[DrawEntry], config: &SvgConfig) -> String {
    let canvas = canvas(entries);
    debug!(figures = entries.len(), view_box:% = canvas.view_box(); "Rendering SVG");

    let mut builder = SvgBuilder::new(config.clone());
    for entry in entries {
        builder.add_element(entry.figure.to_svg());
    }
    builder.build(canvas)
}
