//! Bullet point extraction. Separates a subsection's header lines from its
//! description lines and rebuilds wrapped bullet points into single strings.

use crate::models::Line;

/// Glyphs that mark a bullet on their own, wherever they appear.
pub const BULLET_GLYPHS: &[char] = &[
    '•', '⋅', '∙', '●', '⬤', '◦', '○', '⚬', '⦁', '▪', '■', '‣', '►', '➢', '➤', '⚫', '🞄',
];

/// ASCII markers only count when followed by whitespace or standing alone,
/// so hyphenated words and date ranges are left alone.
const ASCII_MARKERS: &[char] = &['-', '*'];

/// A line with at least this many words in a single item reads as prose, not a header.
const PROSE_LINE_MIN_WORDS: usize = 8;

/// Result of splitting a subsection at its descriptions line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulletSplit {
    pub header_lines: Vec<Line>,
    pub descriptions: Vec<String>,
}

/// Whether `text` begins with a bullet marker.
pub fn starts_with_bullet(text: &str) -> bool {
    let trimmed = text.trim_start();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(c) if BULLET_GLYPHS.contains(&c) => true,
        Some(c) if ASCII_MARKERS.contains(&c) => {
            chars.next().map(char::is_whitespace).unwrap_or(true)
        }
        _ => false,
    }
}

pub fn line_starts_with_bullet(line: &Line) -> bool {
    line.first()
        .map(|item| starts_with_bullet(&item.text))
        .unwrap_or(false)
}

/// Strips every leading marker so that re-extracting a bullet leaves it unchanged.
pub fn strip_bullet(text: &str) -> &str {
    let mut rest = text.trim_start();
    while starts_with_bullet(rest) {
        let mut chars = rest.chars();
        chars.next();
        rest = chars.as_str().trim_start();
    }
    rest
}

/// Index of the first description line.
///
/// The first line whose leading item starts with a bullet marker wins. Resumes without
/// bullets (e.g. LinkedIn exports) fall back to the first single-item prose line.
pub fn descriptions_line_index(lines: &[Line]) -> Option<usize> {
    lines.iter().position(line_starts_with_bullet).or_else(|| {
        lines
            .iter()
            .position(|line| line.len() == 1 && line.items[0].word_count() >= PROSE_LINE_MIN_WORDS)
    })
}

/// Splits `lines` into header lines and reconstructed descriptions.
///
/// `default_index` is used when no description line is found, and the index is clamped
/// to the number of lines.
pub fn split_header_and_descriptions(lines: &[Line], default_index: usize) -> BulletSplit {
    let index = descriptions_line_index(lines)
        .unwrap_or(default_index)
        .min(lines.len());
    BulletSplit {
        header_lines: lines[..index].to_vec(),
        descriptions: bullet_points_from_lines(&lines[index..]),
    }
}

/// Rebuilds bullet points from a description region.
///
/// Without any marker, every line is its own description. Otherwise a marker starts a
/// new bullet and an unmarked line continues the previous one.
pub fn bullet_points_from_lines(lines: &[Line]) -> Vec<String> {
    let has_markers = lines.iter().any(|line| {
        line.items
            .iter()
            .enumerate()
            .any(|(position, item)| opens_bullet(position, &item.text))
    });

    if !has_markers {
        return lines
            .iter()
            .map(Line::text)
            .filter(|text| !text.is_empty())
            .collect();
    }

    let mut bullets: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in lines {
        for (position, item) in line.items.iter().enumerate() {
            let text = if opens_bullet(position, &item.text) {
                if let Some(done) = current.take() {
                    push_bullet(&mut bullets, done);
                }
                current = Some(String::new());
                strip_bullet(&item.text)
            } else {
                item.text.as_str()
            };

            let bullet = current.get_or_insert_with(String::new);
            for word in text.split_whitespace() {
                if !bullet.is_empty() {
                    bullet.push(' ');
                }
                bullet.push_str(word);
            }
        }
    }
    if let Some(done) = current {
        push_bullet(&mut bullets, done);
    }

    bullets
}

/// A line's leading item opens a bullet with any marker; later items only as a lone glyph.
fn opens_bullet(position: usize, text: &str) -> bool {
    if position == 0 {
        starts_with_bullet(text)
    } else {
        is_standalone_glyph(text)
    }
}

fn is_standalone_glyph(text: &str) -> bool {
    let mut chars = text.trim().chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if BULLET_GLYPHS.contains(&c))
}

fn push_bullet(bullets: &mut Vec<String>, bullet: String) {
    if !bullet.is_empty() {
        bullets.push(bullet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextItem;
    use crate::test_support::{bold, item, line};

    #[test]
    fn test_marker_detection() {
        assert!(starts_with_bullet("• Built a compiler"));
        assert!(starts_with_bullet("- Built a compiler"));
        assert!(starts_with_bullet("*"));
        assert!(starts_with_bullet("●Led the team"));
        assert!(!starts_with_bullet("-Built"));
        assert!(!starts_with_bullet("Jan 2020 - Present"));
        assert!(!starts_with_bullet("E-Commerce Platform"));
        assert!(!starts_with_bullet(""));
    }

    #[test]
    fn test_strip_bullet_removes_nested_markers() {
        assert_eq!(strip_bullet("  • - Shipped v2"), "Shipped v2");
        assert_eq!(strip_bullet("Shipped v2"), "Shipped v2");
    }

    #[test]
    fn test_descriptions_index_finds_first_bullet() {
        let lines = vec![
            line(&["Google", "2020"], 10.0),
            line(&["Senior Engineer"], 25.0),
            line(&["• Built search"], 40.0),
        ];
        assert_eq!(descriptions_line_index(&lines), Some(2));
    }

    #[test]
    fn test_descriptions_index_prose_fallback() {
        let lines = vec![
            line(&["Google"], 10.0),
            line(&["Designed and shipped the ranking service used by every product team"], 25.0),
        ];
        assert_eq!(descriptions_line_index(&lines), Some(1));
    }

    #[test]
    fn test_descriptions_index_none() {
        let lines = vec![line(&["JavaScript", "TypeScript", "React"], 10.0)];
        assert_eq!(descriptions_line_index(&lines), None);
    }

    #[test]
    fn test_split_defaults_to_first_line_as_header() {
        let lines = vec![line(&["Acme Corp"], 10.0), line(&["Wrote software"], 25.0)];
        let split = split_header_and_descriptions(&lines, 1);
        assert_eq!(split.header_lines.len(), 1);
        assert_eq!(split.descriptions, vec!["Wrote software"]);
    }

    #[test]
    fn test_split_clamps_default_index() {
        let lines = vec![line(&["Acme Corp"], 10.0)];
        let split = split_header_and_descriptions(&lines, 3);
        assert_eq!(split.header_lines.len(), 1);
        assert!(split.descriptions.is_empty());
    }

    #[test]
    fn test_wrapped_lines_join_previous_bullet() {
        let lines = vec![
            line(&["• Reduced p99 latency by 40% by rewriting"], 10.0),
            line(&["the cache layer in Rust"], 22.0),
            line(&["• Mentored 4 engineers"], 34.0),
        ];
        assert_eq!(
            bullet_points_from_lines(&lines),
            vec![
                "Reduced p99 latency by 40% by rewriting the cache layer in Rust",
                "Mentored 4 engineers"
            ]
        );
    }

    #[test]
    fn test_separate_glyph_item_opens_bullet() {
        let lines = vec![
            Line::new(vec![item("•", 40.0, 10.0), item("Built search", 60.0, 10.0)]),
            Line::new(vec![item("•", 40.0, 22.0), item("Ran on-call", 60.0, 22.0)]),
        ];
        assert_eq!(bullet_points_from_lines(&lines), vec!["Built search", "Ran on-call"]);
    }

    #[test]
    fn test_inline_glyphs_split_bullets() {
        let lines = vec![Line::new(vec![
            item("• Rust", 40.0, 10.0),
            item("•", 120.0, 10.0),
            item("Go", 140.0, 10.0),
        ])];
        assert_eq!(bullet_points_from_lines(&lines), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_unmarked_lines_are_separate_descriptions() {
        let lines = vec![line(&["Languages: Rust, Go"], 10.0), line(&["Tools: Docker"], 22.0)];
        assert_eq!(
            bullet_points_from_lines(&lines),
            vec!["Languages: Rust, Go", "Tools: Docker"]
        );
    }

    #[test]
    fn test_prose_before_first_marker_is_kept() {
        let lines = vec![line(&["Highlights"], 10.0), line(&["- Shipped v2"], 22.0)];
        assert_eq!(bullet_points_from_lines(&lines), vec!["Highlights", "Shipped v2"]);
    }

    #[test]
    fn test_empty_region_is_empty() {
        assert!(bullet_points_from_lines(&[]).is_empty());
        assert!(bullet_points_from_lines(&[line(&["•"], 10.0)]).is_empty());
    }

    #[test]
    fn test_reextracting_a_bullet_is_identity() {
        let lines = vec![
            line(&["•   Built   full-stack app"], 10.0),
            line(&["using React"], 22.0),
        ];
        let first = bullet_points_from_lines(&lines);
        for bullet in &first {
            let again = bullet_points_from_lines(&[line(&[bullet.as_str()], 10.0)]);
            assert_eq!(&again, &vec![bullet.clone()]);
        }
    }

    #[test]
    fn test_input_lines_are_not_mutated() {
        let lines = vec![Line::new(vec![bold("Acme", 40.0, 10.0)]), line(&["- Did work"], 22.0)];
        let snapshot: Vec<Vec<TextItem>> = lines.iter().map(|l| l.items.clone()).collect();
        let _ = split_header_and_descriptions(&lines, 1);
        let after: Vec<Vec<TextItem>> = lines.iter().map(|l| l.items.clone()).collect();
        assert_eq!(snapshot, after);
    }
}
