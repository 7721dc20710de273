//! Keyboard Signature - draw a signature by tracing typed letters across a keyboard
//!
//! This library maps text onto keyboard key positions, connects the keys with
//! a chosen curve style, and renders the resulting stroke as SVG.
//!
//! # Example
//!
//! ```rust
//! use keyboard_signature::render;
//!
//! let svg = render("hello").unwrap();
//! assert!(svg.contains("<path"));
//! ```

pub mod error;
pub mod geometry;
pub mod layout;
pub mod parser;
pub mod path;
pub mod renderer;
pub mod signature;
pub mod theme;

use std::borrow::Cow;

pub use error::PathDataError;
pub use geometry::{BoundingBox, Point};
pub use layout::{KeyGrid, KeyboardLayout, LayoutError};
pub use parser::parse_path_data;
pub use path::{generate_path, CurveStyle, Path, PathCommand, PathError};
pub use renderer::{render_signature_svg, to_data_uri, KeyOverlay, StrokeStyle, SvgConfig};
pub use signature::{anchor_points, canvas_size, SignatureGeometry};
pub use theme::{Theme, ThemeError};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while building the path
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// Error while loading a custom key layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error while loading a theme
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),

    /// Error while parsing serialized path data
    #[error("path data errors: {}", format_path_data_errors(.0))]
    PathData(Vec<PathDataError>),
}

impl From<Vec<PathDataError>> for RenderError {
    fn from(errors: Vec<PathDataError>) -> Self {
        RenderError::PathData(errors)
    }
}

fn format_path_data_errors(errors: &[PathDataError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Built-in keyboard layout
    pub layout: KeyboardLayout,
    /// Whether the numeric row is part of the keyboard
    pub include_numbers: bool,
    /// Custom key grid, replacing the built-in layout when set
    pub grid: Option<KeyGrid>,
    /// Curve style connecting the anchor points
    pub curve: CurveStyle,
    /// Pixel geometry of the keyboard
    pub geometry: SignatureGeometry,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Theme for colors
    pub theme: Theme,
    /// Draw the keyboard underneath the signature
    pub show_keys: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: KeyboardLayout::default(),
            include_numbers: false,
            grid: None,
            curve: CurveStyle::default(),
            geometry: SignatureGeometry::for_numbers(false),
            svg: SvgConfig::default(),
            theme: Theme::default(),
            show_keys: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the built-in keyboard layout
    pub fn with_layout(mut self, layout: KeyboardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Include or exclude the numeric row.
    ///
    /// Also resets the keyboard geometry and canvas size to the matching
    /// defaults, so call this before overriding either.
    pub fn with_numbers(mut self, include: bool) -> Self {
        self.include_numbers = include;
        self.geometry = SignatureGeometry::for_numbers(include);
        let (width, height) = canvas_size(include);
        self.svg = self.svg.with_size(width, height);
        self
    }

    /// Use a custom key grid instead of a built-in layout
    pub fn with_grid(mut self, grid: KeyGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Set the curve style
    pub fn with_curve(mut self, curve: CurveStyle) -> Self {
        self.curve = curve;
        self
    }

    /// Set the keyboard geometry
    pub fn with_geometry(mut self, geometry: SignatureGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable the keyboard overlay
    pub fn with_keys(mut self, show_keys: bool) -> Self {
        self.show_keys = show_keys;
        self
    }

    /// The key grid in effect: the custom grid, or the built-in layout
    pub fn key_grid(&self) -> Cow<'_, KeyGrid> {
        match &self.grid {
            Some(grid) => Cow::Borrowed(grid),
            None => Cow::Owned(KeyGrid::builtin(self.layout, self.include_numbers)),
        }
    }
}

/// Build the signature path for `text`
///
/// # Example
///
/// ```rust
/// use keyboard_signature::{signature_path, CurveStyle, RenderConfig};
///
/// let config = RenderConfig::new().with_curve(CurveStyle::CatmullRom);
/// let path = signature_path("rust", &config).unwrap();
/// assert_eq!(path.endpoints().len(), 4);
/// ```
pub fn signature_path(text: &str, config: &RenderConfig) -> Result<Path, RenderError> {
    let grid = config.key_grid();
    let points = anchor_points(text, &grid, &config.geometry);
    log::debug!(
        "{} of {} characters found on the {} layout",
        points.len(),
        text.chars().count(),
        grid.name.as_deref().unwrap_or("custom")
    );
    Ok(generate_path(&points, config.curve)?)
}

/// Render text to an SVG signature with default configuration
pub fn render(text: &str) -> Result<String, RenderError> {
    render_with_config(text, &RenderConfig::default())
}

/// Render text to an SVG signature with custom configuration
///
/// # Example
///
/// ```rust
/// use keyboard_signature::{render_with_config, CurveStyle, RenderConfig, StrokeStyle, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_numbers(true)
///     .with_curve(CurveStyle::CubicBezier)
///     .with_svg(SvgConfig::new().with_size(650.0, 260.0).with_stroke_style(StrokeStyle::Gradient));
///
/// let svg = render_with_config("license 007", &config).unwrap();
/// assert!(svg.contains("linearGradient"));
/// ```
pub fn render_with_config(text: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let path = signature_path(text, config)?;

    let svg = if config.show_keys {
        let grid = config.key_grid();
        let overlay = KeyOverlay {
            grid: &grid,
            geometry: config.geometry,
            text,
        };
        render_signature_svg(&path, &config.svg, &config.theme, Some(&overlay))
    } else {
        render_signature_svg(&path, &config.svg, &config.theme, None)
    };

    Ok(svg)
}

/// Render serialized path data (an SVG `d` string) to an SVG document
pub fn render_path_data(d: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let path = parse_path_data(d)?;
    log::debug!("parsed {} path commands", path.len());
    Ok(render_signature_svg(&path, &config.svg, &config.theme, None))
}
