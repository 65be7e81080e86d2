//! Section classifier: splits a document's lines at heading lines.
//!
//! A heading must both contain a known keyword and look like a heading: a single
//! short item that is bold and upper-case, or capitalized letters only, or set in a
//! noticeably larger font than the body text. The first two lines are never headings
//! (they hold the name and contact row on virtually every resume).

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ParserConfig;
use crate::models::{Line, TextItem};
use crate::sections::{ResumeSections, Section};

const MIN_HEADING_LINE_INDEX: usize = 2;
const MAX_PLAIN_HEADING_WORDS: usize = 2;
const MAX_LARGE_HEADING_WORDS: usize = 4;
const LARGE_FONT_RATIO: f32 = 1.1;

/// Groups lines into the preamble plus one section per heading line.
pub fn group_lines_into_sections(lines: &[Line], config: &ParserConfig) -> ResumeSections {
    let body_font_size = dominant_font_size(lines);
    let mut sections = vec![Section::preamble()];

    for (index, line) in lines.iter().enumerate() {
        if is_section_heading(line, index, body_font_size, config) {
            let heading = line.text();
            let category = config.category_for_heading(&heading);
            debug!(
                heading = %heading,
                category = category.map(|c| c.as_str()).unwrap_or("none"),
                line = index,
                "Opened section"
            );
            sections.push(Section {
                heading,
                category,
                lines: Vec::new(),
            });
        } else if let Some(section) = sections.last_mut() {
            section.lines.push(line.clone());
        }
    }

    ResumeSections::new(sections)
}

pub fn is_section_heading(
    line: &Line,
    index: usize,
    body_font_size: f32,
    config: &ParserConfig,
) -> bool {
    if index < MIN_HEADING_LINE_INDEX || line.len() != 1 {
        return false;
    }
    let item = &line.items[0];
    let text = item.text.trim().trim_end_matches(':').trim_end();
    if text.is_empty() || !config.has_heading_keyword(text) {
        return false;
    }

    if item.is_bold() && is_all_upper_case(text) {
        return true;
    }

    // Short capitalized keyword lines count even when they are really a job title on
    // its own line, e.g. "Project Manager" opens a project section.
    let words = text.split_whitespace().filter(|w| *w != "&").count();
    let starts_capitalized = text.chars().next().map(char::is_uppercase).unwrap_or(false);
    if words <= MAX_PLAIN_HEADING_WORDS && starts_capitalized && is_letters_spaces_ampersands(text)
    {
        return true;
    }

    words <= MAX_LARGE_HEADING_WORDS
        && body_font_size > 0.0
        && item.font_size >= body_font_size * LARGE_FONT_RATIO
}

/// Most frequent font size across all items, to a tenth of a point.
pub fn dominant_font_size(lines: &[Line]) -> f32 {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for item in lines.iter().flat_map(|line| line.items.iter()) {
        *counts.entry(size_key(item)).or_insert(0) += 1;
    }
    let mut best: Option<(i64, usize)> = None;
    for (size, count) in counts {
        if best.map(|(_, n)| count > n).unwrap_or(true) {
            best = Some((size, count));
        }
    }
    best.map(|(size, _)| size as f32 / 10.0).unwrap_or(0.0)
}

fn size_key(item: &TextItem) -> i64 {
    (item.font_size * 10.0).round() as i64
}

fn is_all_upper_case(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && text.to_uppercase() == text
}

fn is_letters_spaces_ampersands(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '&')
}
