//! Keyboard layouts: character to logical key-grid coordinates
//!
//! Letter rows sit at `y = 0, 1, 2`. The optional numeric row sits at
//! `y = -1`, so enabling it never moves a letter. Coordinates are in key
//! units; pixel scaling happens in [`crate::signature`].

mod error;
mod tables;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Point;

pub use error::LayoutError;

/// Built-in keyboard layouts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardLayout {
    #[default]
    Qwerty,
    Azerty,
    Colemak,
    Dvorak,
    /// Alphabetical rows
    Abcdef,
}

impl KeyboardLayout {
    pub const ALL: [KeyboardLayout; 5] = [
        KeyboardLayout::Qwerty,
        KeyboardLayout::Azerty,
        KeyboardLayout::Colemak,
        KeyboardLayout::Dvorak,
        KeyboardLayout::Abcdef,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyboardLayout::Qwerty => "qwerty",
            KeyboardLayout::Azerty => "azerty",
            KeyboardLayout::Colemak => "colemak",
            KeyboardLayout::Dvorak => "dvorak",
            KeyboardLayout::Abcdef => "abcdef",
        }
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized layout tag
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown keyboard layout '{0}' (expected one of: qwerty, azerty, colemak, dvorak, abcdef)")]
pub struct UnknownLayout(pub String);

impl FromStr for KeyboardLayout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        KeyboardLayout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == tag)
            .ok_or_else(|| UnknownLayout(s.to_string()))
    }
}

/// A mapping from key characters to grid coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct KeyGrid {
    /// Optional display name
    pub name: Option<String>,
    /// Keys sorted by row, then column
    keys: Vec<(char, Point)>,
}

/// TOML structure for deserializing custom layouts
#[derive(Deserialize)]
struct TomlLayout {
    metadata: Option<TomlMetadata>,
    keys: BTreeMap<String, [f64; 2]>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Uppercase a key character.
///
/// Characters whose uppercase form is more than one character (`ß`) are
/// kept as typed, so every key folds to exactly one grid entry.
pub fn fold_key(key: char) -> char {
    let mut upper = key.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => key,
    }
}

impl KeyGrid {
    /// Key table of a built-in layout
    pub fn builtin(layout: KeyboardLayout, include_numbers: bool) -> Self {
        let mut keys = tables::letter_keys(layout);
        if include_numbers {
            keys.extend(tables::number_keys());
        }
        Self::from_keys(Some(layout.as_str().to_uppercase()), keys)
    }

    /// Build a grid from explicit key positions.
    ///
    /// Characters are uppercased; later duplicates replace earlier ones.
    pub fn from_keys(name: Option<String>, keys: impl IntoIterator<Item = (char, Point)>) -> Self {
        let mut merged: Vec<(char, Point)> = Vec::new();
        for (key, pos) in keys {
            let key = fold_key(key);
            match merged.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = pos,
                None => merged.push((key, pos)),
            }
        }
        merged.sort_by(|(_, a), (_, b)| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
        Self { name, keys: merged }
    }

    /// Load a custom layout from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a custom layout from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, LayoutError> {
        let parsed: TomlLayout = toml::from_str(content)?;

        let mut keys = Vec::with_capacity(parsed.keys.len());
        for (name, [x, y]) in parsed.keys {
            let mut chars = name.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(c), None) => fold_key(c),
                _ => return Err(LayoutError::invalid_key(name)),
            };
            if !x.is_finite() || !y.is_finite() {
                return Err(LayoutError::NonFinitePosition { key, x, y });
            }
            if keys.iter().any(|(k, _)| *k == key) {
                return Err(LayoutError::DuplicateKey { key });
            }
            keys.push((key, Point::new(x, y)));
        }

        log::debug!("loaded custom layout with {} keys", keys.len());

        Ok(Self::from_keys(
            parsed.metadata.and_then(|m| m.name),
            keys,
        ))
    }

    /// Grid position of a character (case-insensitive)
    pub fn get(&self, key: char) -> Option<Point> {
        let key = fold_key(key);
        self.keys.iter().find(|(k, _)| *k == key).map(|(_, p)| *p)
    }

    pub fn contains(&self, key: char) -> bool {
        self.get(key).is_some()
    }

    /// Keys in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (char, Point)> + '_ {
        self.keys.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
