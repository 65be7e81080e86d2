//! Fixture builders shared by the unit tests.

use crate::models::{Line, TextItem};

pub const REGULAR: &str = "Helvetica";
pub const BOLD: &str = "Helvetica-Bold";

/// A 10pt regular item whose width is derived from its text (5pt per glyph).
pub fn item(text: &str, left: f32, top: f32) -> TextItem {
    styled(text, left, top, REGULAR, 10.0)
}

pub fn bold(text: &str, left: f32, top: f32) -> TextItem {
    styled(text, left, top, BOLD, 10.0)
}

pub fn styled(text: &str, left: f32, top: f32, font_name: &str, font_size: f32) -> TextItem {
    TextItem {
        text: text.to_string(),
        left,
        top,
        width: text.chars().count() as f32 * font_size * 0.5,
        height: font_size,
        font_name: font_name.to_string(),
        font_size,
    }
}

/// A line of regular items spaced far enough apart to never be merged.
pub fn line(texts: &[&str], top: f32) -> Line {
    Line::new(
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| item(text, 40.0 + i as f32 * 200.0, top))
            .collect(),
    )
}
