//! Line grouping: turns the positioned TextItem stream into Lines.
//!
//! PDF producers often split one word or phrase into several glyph runs. Runs that sit
//! on the same band, share a font and are closer than a typical character width are
//! merged back into a single item so that feature predicates see whole phrases.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ParserConfig;
use crate::models::{Line, TextItem};

/// Gaps narrower than this fraction of a character width are treated as intra-word.
const INTRA_WORD_GAP_RATIO: f32 = 0.2;

/// Groups reading-ordered items into lines and merges adjacent fragments.
///
/// Items whose text is blank are dropped; all returned items are fresh copies with
/// trimmed text.
pub fn group_text_items_into_lines(items: &[TextItem], config: &ParserConfig) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<TextItem> = Vec::new();

    for item in items.iter().filter(|item| !item.text.trim().is_empty()) {
        if let Some(anchor) = current.first() {
            let tolerance = config.line_tolerance * item.extent().max(anchor.extent());
            if (item.top - anchor.top).abs() > tolerance {
                lines.push(Line::new(std::mem::take(&mut current)));
            }
        }
        let mut owned = item.clone();
        owned.text = item.text.trim().to_string();
        current.push(owned);
    }
    if !current.is_empty() {
        lines.push(Line::new(current));
    }

    let char_width = typical_char_width(items);
    debug!(
        lines = lines.len(),
        typical_char_width = char_width,
        "Grouped text items into lines"
    );

    lines
        .into_iter()
        .map(|line| merge_adjacent_items(line, char_width))
        .collect()
}

/// Average glyph width over the items set in the document's most common font.
pub fn typical_char_width(items: &[TextItem]) -> f32 {
    let mut font_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items.iter().filter(|item| !item.text.trim().is_empty()) {
        *font_counts.entry(item.font_name.as_str()).or_insert(0) += 1;
    }

    let mut dominant: Option<(&str, usize)> = None;
    for (font, count) in font_counts {
        if dominant.map(|(_, best)| count > best).unwrap_or(true) {
            dominant = Some((font, count));
        }
    }
    let Some((dominant_font, _)) = dominant else {
        return 0.0;
    };

    let (total_width, total_chars) = items
        .iter()
        .filter(|item| item.font_name == dominant_font && item.width > 0.0)
        .fold((0.0_f32, 0usize), |(width, chars), item| {
            (width + item.width, chars + item.text.chars().count())
        });

    if total_chars == 0 {
        0.0
    } else {
        total_width / total_chars as f32
    }
}

fn merge_adjacent_items(line: Line, char_width: f32) -> Line {
    let mut merged: Vec<TextItem> = Vec::with_capacity(line.len());

    for item in line.items {
        if let Some(previous) = merged.last_mut() {
            let gap = item.left - previous.right();
            if previous.font_name == item.font_name && gap <= char_width {
                if gap >= char_width * INTRA_WORD_GAP_RATIO {
                    previous.text.push(' ');
                }
                previous.text.push_str(&item.text);
                previous.width = item.right().max(previous.right()) - previous.left;
                previous.height = previous.height.max(item.height);
                continue;
            }
        }
        merged.push(item);
    }

    Line::new(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bold, item};

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(group_text_items_into_lines(&[], &ParserConfig::default()).is_empty());
    }

    #[test]
    fn test_items_on_same_band_share_a_line() {
        let items = vec![
            bold("Google", 40.0, 100.0),
            item("Jan 2020 - Present", 400.0, 101.0),
            item("Senior Engineer", 40.0, 114.0),
        ];
        let lines = group_text_items_into_lines(&items, &ParserConfig::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 2);
        assert_eq!(lines[1].text(), "Senior Engineer");
    }

    #[test]
    fn test_blank_items_are_dropped() {
        let items = vec![item("Jane", 40.0, 20.0), item("   ", 70.0, 20.0)];
        let lines = group_text_items_into_lines(&items, &ParserConfig::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 1);
    }

    #[test]
    fn test_touching_fragments_merge_without_space() {
        // "Soft" ends at 60.0, "ware" starts at 60.0
        let items = vec![item("Soft", 40.0, 20.0), item("ware", 60.0, 20.0)];
        let lines = group_text_items_into_lines(&items, &ParserConfig::default());
        assert_eq!(lines[0].len(), 1);
        assert_eq!(lines[0].items[0].text, "Software");
        assert_eq!(lines[0].items[0].width, 40.0);
    }

    #[test]
    fn test_word_spaced_fragments_merge_with_space() {
        // char width is 5.0; a 4pt gap is a word space
        let items = vec![item("Senior", 40.0, 20.0), item("Engineer", 74.0, 20.0)];
        let lines = group_text_items_into_lines(&items, &ParserConfig::default());
        assert_eq!(lines[0].items[0].text, "Senior Engineer");
    }

    #[test]
    fn test_different_fonts_are_not_merged() {
        let items = vec![bold("Google", 40.0, 20.0), item("Remote", 70.0, 20.0)];
        let lines = group_text_items_into_lines(&items, &ParserConfig::default());
        assert_eq!(lines[0].len(), 2);
    }

    #[test]
    fn test_far_apart_items_are_not_merged() {
        let items = vec![item("JavaScript", 40.0, 20.0), item("TypeScript", 240.0, 20.0)];
        let lines = group_text_items_into_lines(&items, &ParserConfig::default());
        assert_eq!(lines[0].len(), 2);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = vec![item(" Soft", 40.0, 20.0), item("ware ", 65.0, 20.0)];
        let snapshot = items.clone();
        let _ = group_text_items_into_lines(&items, &ParserConfig::default());
        assert_eq!(items, snapshot);
    }

    #[test]
    fn test_typical_char_width_uses_dominant_font() {
        let items = vec![
            item("abcd", 0.0, 0.0),
            item("efgh", 0.0, 10.0),
            bold("WIDE", 0.0, 20.0),
        ];
        assert_eq!(typical_char_width(&items), 5.0);
    }
}
