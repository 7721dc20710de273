//! Configuration for SVG rendering

use serde::{Deserialize, Serialize};

use crate::path::DEFAULT_PRECISION;
use crate::signature::CANVAS_WIDTH;

/// How the signature stroke is painted
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    /// One flat color
    #[default]
    Solid,
    /// Linear gradient from the stroke color to the secondary color
    Gradient,
}

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Canvas width in pixels
    pub width: f64,

    /// Canvas height in pixels
    pub height: f64,

    /// Stroke color; the theme's `stroke` token when unset
    pub stroke_color: Option<String>,

    /// Gradient end color; the theme's `stroke-secondary` token when unset
    pub secondary_color: Option<String>,

    /// Stroke thickness in pixels
    pub stroke_width: f64,

    pub stroke_style: StrokeStyle,

    /// Decimals written for path coordinates
    pub precision: usize,

    /// Corner radius of key caps in the keyboard overlay
    pub key_radius: f64,

    /// Whether to include XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names and ids (e.g., "sig-" for "sig-key")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: 200.0,
            stroke_color: None,
            secondary_color: None,
            stroke_width: 2.0,
            stroke_style: StrokeStyle::Solid,
            precision: DEFAULT_PRECISION,
            key_radius: 8.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("sig-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the stroke color
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = Some(color.into());
        self
    }

    /// Set the gradient end color
    pub fn with_secondary_color(mut self, color: impl Into<String>) -> Self {
        self.secondary_color = Some(color.into());
        self
    }

    /// Set the stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the stroke style
    pub fn with_stroke_style(mut self, style: StrokeStyle) -> Self {
        self.stroke_style = style;
        self
    }

    /// Set the coordinate precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
