//! SVG renderer for signature paths
//!
//! This module takes a generated [`crate::Path`] and produces a standalone
//! SVG document, optionally with the keyboard drawn underneath.

pub mod config;
pub mod svg;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub use config::{StrokeStyle, SvgConfig};
pub use svg::{render_signature_svg, KeyOverlay};

/// Encode an SVG document as a `data:` URI, suitable for an image source
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        assert_eq!(
            to_data_uri("<svg/>"),
            "data:image/svg+xml;base64,PHN2Zy8+"
        );
    }
}
