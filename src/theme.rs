//! Color themes for rendered signatures
//!
//! A theme maps symbolic color tokens (`background`, `stroke`, ...) to
//! concrete CSS colors. Two palettes ship built in, dark and light, and
//! custom palettes can be loaded from TOML.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A theme mapping symbolic colors to concrete values
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

const DARK_PALETTE: &str = r##"
[metadata]
name = "dark"

[colors]
background = "#0a0a0a"
foreground = "#fafafa"
muted = "#262626"
muted-foreground = "#a3a3a3"
border = "#262626"
accent = "#404040"

# Signature stroke (solid color, and gradient end)
stroke = "#ffffff"
stroke-secondary = "#ec4899"
"##;

const LIGHT_PALETTE: &str = r##"
[metadata]
name = "light"

[colors]
background = "#ffffff"
foreground = "#0a0a0a"
muted = "#f5f5f5"
muted-foreground = "#737373"
border = "#e5e5e5"
accent = "#e5e5e5"

stroke = "#0a0a0a"
stroke-secondary = "#ec4899"
"##;

impl Theme {
    /// The built-in dark theme (the default)
    pub fn dark() -> Self {
        Self::builtin(DARK_PALETTE)
    }

    /// The built-in light theme
    pub fn light() -> Self {
        Self::builtin(LIGHT_PALETTE)
    }

    fn builtin(palette: &str) -> Self {
        // Built-in palettes are constants covered by tests
        Self::from_str(palette).unwrap_or_else(|_| Self {
            name: None,
            description: None,
            colors: HashMap::new(),
        })
    }

    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load theme from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a color token to a concrete value
    ///
    /// Returns None if the token is not defined in this theme.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token with fallback to the dark palette
    ///
    /// Fallback order:
    /// 1. Check this theme for exact token
    /// 2. Check the dark palette for exact token
    /// 3. Use category default (background → #0a0a0a, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::dark();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("background") {
            return "#0a0a0a".to_string();
        }
        if token.starts_with("stroke") {
            return "#ffffff".to_string();
        }
        if token.starts_with("muted") || token.starts_with("border") {
            return "#262626".to_string();
        }

        "#fafafa".to_string()
    }

    /// Tokens in sorted order, for deterministic output
    pub fn sorted_tokens(&self) -> Vec<(&str, &str)> {
        let mut tokens: Vec<_> = self
            .colors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        tokens.sort();
        tokens
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
