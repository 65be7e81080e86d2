//! Section and subsection decomposition of a resume's lines.

pub mod classifier;
pub mod subsections;

use serde::{Deserialize, Serialize};

use crate::models::Line;

pub use classifier::group_lines_into_sections;
pub use subsections::divide_section_into_subsections;

/// Extracted section categories, declared in heading tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionCategory {
    Profile,
    Education,
    Experience,
    Project,
    Skill,
}

impl SectionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionCategory::Profile => "profile",
            SectionCategory::Education => "education",
            SectionCategory::Experience => "experience",
            SectionCategory::Project => "project",
            SectionCategory::Skill => "skill",
        }
    }
}

/// A heading-delimited run of lines. The heading line itself is not included.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub category: Option<SectionCategory>,
    pub lines: Vec<Line>,
}

impl Section {
    /// The implicit bucket holding every line before the first heading.
    pub fn preamble() -> Self {
        Self {
            heading: String::new(),
            category: Some(SectionCategory::Profile),
            lines: Vec::new(),
        }
    }
}

/// Output of the section classifier. The first section is always the preamble.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeSections {
    sections: Vec<Section>,
}

impl ResumeSections {
    pub(crate) fn new(sections: Vec<Section>) -> Self {
        debug_assert!(
            sections.first().map(|s| s.heading.is_empty()).unwrap_or(false),
            "first section must be the preamble"
        );
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Lines preceding the first recognized heading.
    pub fn preamble_lines(&self) -> &[Line] {
        self.sections
            .first()
            .map(|s| s.lines.as_slice())
            .unwrap_or(&[])
    }

    /// Lines of the first section of `category`; empty when the heading never appeared.
    pub fn lines_for(&self, category: SectionCategory) -> &[Line] {
        self.sections
            .iter()
            .find(|s| s.category == Some(category))
            .map(|s| s.lines.as_slice())
            .unwrap_or(&[])
    }

    /// Lines of the first headed section whose heading contains any of `keywords`.
    pub fn lines_by_keywords(&self, keywords: &[&str]) -> &[Line] {
        self.sections
            .iter()
            .filter(|s| !s.heading.is_empty())
            .find(|s| {
                let heading = s.heading.to_lowercase();
                keywords.iter().any(|k| heading.contains(k))
            })
            .map(|s| s.lines.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::line;

    fn sections() -> ResumeSections {
        let mut preamble = Section::preamble();
        preamble.lines.push(line(&["Jane Doe"], 20.0));
        ResumeSections::new(vec![
            preamble,
            Section {
                heading: "Summary".to_string(),
                category: Some(SectionCategory::Profile),
                lines: vec![line(&["Backend engineer with ten years of experience"], 80.0)],
            },
            Section {
                heading: "Relevant Coursework".to_string(),
                category: None,
                lines: vec![line(&["Distributed Systems"], 120.0)],
            },
        ])
    }

    #[test]
    fn test_profile_lookup_returns_preamble() {
        let s = sections();
        assert_eq!(s.lines_for(SectionCategory::Profile)[0].text(), "Jane Doe");
        assert_eq!(s.preamble_lines().len(), 1);
    }

    #[test]
    fn test_missing_category_is_empty() {
        assert!(sections().lines_for(SectionCategory::Education).is_empty());
    }

    #[test]
    fn test_lookup_by_heading_keyword() {
        let s = sections();
        assert_eq!(s.lines_by_keywords(&["course"])[0].text(), "Distributed Systems");
        assert!(s.lines_by_keywords(&["objective"]).is_empty());
    }
}
