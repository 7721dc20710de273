//! Typed text to pixel anchor points
//!
//! Each character of the text is looked up on a [`KeyGrid`] and scaled to the
//! pixel center of its key. Characters without a key are skipped.

use crate::geometry::Point;
use crate::layout::{fold_key, KeyGrid};

/// Canvas width shared by both keyboard heights
pub const CANVAS_WIDTH: f64 = 650.0;

/// Pixel geometry of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignatureGeometry {
    /// Distance between neighboring key origins
    pub spacing: f64,

    /// Width of a key cap; anchors sit `key_size / 2` into the key on both axes
    pub key_size: f64,

    /// Drawn height of a key cap in the keyboard overlay
    pub key_height: f64,

    /// Pixel position of grid coordinate (0, 0)
    pub origin: Point,
}

impl Default for SignatureGeometry {
    fn default() -> Self {
        Self {
            spacing: 60.0,
            key_size: 56.0,
            key_height: 48.0,
            origin: Point::new(0.0, 15.0),
        }
    }
}

impl SignatureGeometry {
    /// Create a new geometry with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Default geometry, shifted down one row when the numeric row is shown
    pub fn for_numbers(include_numbers: bool) -> Self {
        let base_y = if include_numbers { 75.0 } else { 15.0 };
        Self::default().with_origin(Point::new(0.0, base_y))
    }

    /// Set the key spacing
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the key size
    pub fn with_key_size(mut self, key_size: f64) -> Self {
        self.key_size = key_size;
        self
    }

    /// Set the grid origin
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Top-left pixel corner of the key at a grid coordinate
    pub fn key_corner(&self, grid: Point) -> Point {
        grid * self.spacing + self.origin
    }

    /// Pixel center of the key at a grid coordinate
    pub fn key_center(&self, grid: Point) -> Point {
        self.key_corner(grid) + Point::new(self.key_size / 2.0, self.key_size / 2.0)
    }
}

/// Anchor points for `text`, one per character found on the grid
pub fn anchor_points(text: &str, grid: &KeyGrid, geometry: &SignatureGeometry) -> Vec<Point> {
    text.chars()
        .map(fold_key)
        .filter_map(|c| grid.get(c))
        .map(|pos| geometry.key_center(pos))
        .collect()
}

/// Canvas size (width, height) for the keyboard, taller with the numeric row
pub fn canvas_size(include_numbers: bool) -> (f64, f64) {
    let height = if include_numbers { 260.0 } else { 200.0 };
    (CANVAS_WIDTH, height)
}
