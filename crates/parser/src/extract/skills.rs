use tracing::debug;

use crate::bullets::{bullet_points_from_lines, descriptions_line_index};
use crate::config::ParserConfig;
use crate::models::{flatten_lines, Line, ResumeSkills};
use crate::sections::{ResumeSections, SectionCategory};

/// Skills are read from the whole section: everything above the descriptions line is a
/// list of featured skills, everything from it on is bullet-extracted.
///
/// Without a descriptions line the section is all descriptions, except for a lone row
/// of separate items, which is read as featured skills.
pub fn extract_skills(sections: &ResumeSections, config: &ParserConfig) -> ResumeSkills {
    let lines = sections.lines_for(SectionCategory::Skill);
    let index = descriptions_line_index(lines)
        .unwrap_or_else(|| usize::from(is_single_skill_row(lines)))
        .min(lines.len());

    let featured_skills = if index > 0 {
        flatten_lines(&lines[..index])
            .into_iter()
            .map(|item| item.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .take(config.max_featured_skills)
            .collect()
    } else {
        Vec::new()
    };
    let descriptions = bullet_points_from_lines(&lines[index..]);

    debug!(
        featured = featured_skills.len(),
        descriptions = descriptions.len(),
        "Extracted skills"
    );
    ResumeSkills {
        featured_skills,
        descriptions,
    }
}

fn is_single_skill_row(lines: &[Line]) -> bool {
    lines.len() == 1 && lines[0].len() > 1
}
