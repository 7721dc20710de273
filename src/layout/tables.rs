//! Static key tables for the built-in layouts

use crate::geometry::Point;

use super::KeyboardLayout;

/// Horizontal offset of each letter row, in key widths
const ROW_STAGGER: [f64; 3] = [0.0, 0.5, 1.0];

/// Row index of the numeric row
const NUMBER_ROW_Y: f64 = -1.0;

const NUMBER_ROW: &str = "1234567890";

/// Letter rows, top to bottom. Punctuation holds a column but is not mapped.
fn rows(layout: KeyboardLayout) -> [&'static str; 3] {
    match layout {
        KeyboardLayout::Qwerty => ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"],
        KeyboardLayout::Azerty => ["AZERTYUIOP", "QSDFGHJKLM", "WXCVBN"],
        KeyboardLayout::Colemak => ["QWFPGJLUY", "ARSTDHNEIO", "ZXCVBKM"],
        KeyboardLayout::Dvorak => ["',.PYFGCRL", "AOEUIDHTNS", ";QJKXBMWVZ"],
        KeyboardLayout::Abcdef => ["ABCDEFGHIJ", "KLMNOPQRST", "UVWXYZ"],
    }
}

pub(super) fn letter_keys(layout: KeyboardLayout) -> Vec<(char, Point)> {
    rows(layout)
        .into_iter()
        .zip(ROW_STAGGER)
        .enumerate()
        .flat_map(|(row, (keys, stagger))| row_keys(keys, row as f64, stagger))
        .collect()
}

pub(super) fn number_keys() -> Vec<(char, Point)> {
    row_keys(NUMBER_ROW, NUMBER_ROW_Y, 0.0).collect()
}

fn row_keys(keys: &'static str, y: f64, stagger: f64) -> impl Iterator<Item = (char, Point)> {
    keys.chars()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_alphanumeric())
        .map(move |(col, c)| (c, Point::new(col as f64 + stagger, y)))
}
