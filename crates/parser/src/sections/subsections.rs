//! Subsection divider: splits one section into its repeated entries
//! (one job, one degree, one project).

use std::collections::BTreeMap;

use tracing::debug;

use crate::bullets::line_starts_with_bullet;
use crate::models::Line;

/// Divides a section's lines into subsections.
///
/// A line opens a new subsection when its gap to the previous line exceeds the
/// section's most common line gap times `gap_multiplier` (a blank-line separator), or
/// when it brings back a bold leading item after a non-bold line (a new header row).
/// Non-positive gaps, as seen across page breaks, never split.
pub fn divide_section_into_subsections(lines: &[Line], gap_multiplier: f32) -> Vec<Vec<Line>> {
    let threshold = typical_line_gap(lines).map(|gap| gap * gap_multiplier);
    let mut subsections: Vec<Vec<Line>> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let opens = match index.checked_sub(1).map(|prev| &lines[prev]) {
            None => true,
            Some(previous) => {
                let gap_split = match (threshold, line_gap(previous, line)) {
                    (Some(threshold), Some(gap)) => gap > threshold,
                    _ => false,
                };
                gap_split || reintroduces_bold(previous, line)
            }
        };

        if opens {
            subsections.push(Vec::new());
        }
        if let Some(current) = subsections.last_mut() {
            current.push(line.clone());
        }
    }

    debug!(
        lines = lines.len(),
        subsections = subsections.len(),
        "Divided section into subsections"
    );
    subsections
}

/// Most frequent positive gap between consecutive lines, rounded to whole points.
/// Ties go to the smaller gap.
pub fn typical_line_gap(lines: &[Line]) -> Option<f32> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for pair in lines.windows(2) {
        if let Some(gap) = line_gap(&pair[0], &pair[1]) {
            *counts.entry(gap.round() as i64).or_insert(0) += 1;
        }
    }

    let mut best: Option<(i64, usize)> = None;
    for (gap, count) in counts {
        if best.map(|(_, n)| count > n).unwrap_or(true) {
            best = Some((gap, count));
        }
    }
    best.map(|(gap, _)| gap as f32)
}

fn line_gap(previous: &Line, line: &Line) -> Option<f32> {
    let gap = line.top()? - previous.top()?;
    (gap > 0.0).then_some(gap)
}

fn reintroduces_bold(previous: &Line, line: &Line) -> bool {
    line.starts_bold() && !previous.starts_bold() && !line_starts_with_bullet(line)
}
