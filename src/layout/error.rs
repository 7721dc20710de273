//! Error types for keyboard layout loading

use thiserror::Error;

/// Errors that can occur when loading a custom key layout
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to read layout file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse layout TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A `[keys]` entry whose name is not exactly one character
    #[error("invalid key name '{key}': keys must be a single character")]
    InvalidKey { key: String },

    /// A key position containing NaN or infinity
    #[error("key '{key}' has a non-finite position ({x}, {y})")]
    NonFinitePosition { key: char, x: f64, y: f64 },

    /// Two entries that map to the same key after uppercasing
    #[error("key '{key}' is defined more than once")]
    DuplicateKey { key: char },
}

impl LayoutError {
    /// Create an invalid key error
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }
}
