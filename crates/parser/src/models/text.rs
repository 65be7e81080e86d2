//! Positioned text produced by the upstream PDF text layer, and the lines built from it.

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// One positioned fragment of text with its font metadata.
///
/// `left`/`top` are page-relative and `top` grows downward, so reading order is
/// ascending `top`, then ascending `left` inside a line band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    pub text: String,
    pub left: f32,
    pub top: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub font_name: String,
    #[serde(default)]
    pub font_size: f32,
}

impl TextItem {
    /// Bold is read off the embedded font name, e.g. `Arial-BoldMT` or `Calibri,Bold`.
    pub fn is_bold(&self) -> bool {
        self.font_name.to_lowercase().contains("bold")
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Vertical extent used for line-band tolerance. Some producers emit zero heights.
    pub fn extent(&self) -> f32 {
        if self.height > 0.0 {
            self.height
        } else {
            self.font_size
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), ParseError> {
        let coordinates = [
            ("left", self.left),
            ("top", self.top),
            ("width", self.width),
            ("height", self.height),
            ("fontSize", self.font_size),
        ];
        for (field, value) in coordinates {
            if !value.is_finite() {
                return Err(ParseError::InvalidTextItem {
                    index,
                    reason: format!("{field} is not a finite number"),
                });
            }
        }
        for (field, value) in [("width", self.width), ("height", self.height), ("fontSize", self.font_size)] {
            if value < 0.0 {
                return Err(ParseError::InvalidTextItem {
                    index,
                    reason: format!("{field} must not be negative (got {value})"),
                });
            }
        }
        Ok(())
    }
}

/// TextItems judged to share one horizontal band, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line {
    pub items: Vec<TextItem>,
}

impl Line {
    pub fn new(items: Vec<TextItem>) -> Self {
        Self { items }
    }

    pub fn first(&self) -> Option<&TextItem> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Top of the band, taken from the leading item.
    pub fn top(&self) -> Option<f32> {
        self.first().map(|item| item.top)
    }

    /// Item texts joined with single spaces, whitespace collapsed.
    pub fn text(&self) -> String {
        self.items
            .iter()
            .flat_map(|item| item.text.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn starts_bold(&self) -> bool {
        self.first().map(TextItem::is_bold).unwrap_or(false)
    }
}

impl From<Vec<TextItem>> for Line {
    fn from(items: Vec<TextItem>) -> Self {
        Self::new(items)
    }
}

/// Flattens lines into their items, preserving reading order.
pub fn flatten_lines(lines: &[Line]) -> Vec<TextItem> {
    lines.iter().flat_map(|line| line.items.iter().cloned()).collect()
}
