use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;
use crate::sections::SectionCategory;

/// Tunable heuristics of the extraction engine.
///
/// The defaults are calibrated against single-column resumes exported from common
/// word processors and resume builders. Every field can be overridden from JSON;
/// missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Two items share a line when their tops differ by at most this fraction of
    /// the taller item's extent.
    pub line_tolerance: f32,
    /// A line gap larger than the section's typical gap times this starts a new subsection.
    pub subsection_gap_multiplier: f32,
    /// Header/description boundary used when no bullet or prose line is found.
    pub default_descriptions_line_index: usize,
    pub max_featured_skills: usize,
    pub max_text_items: usize,
    /// Heading keywords per category. Iteration order is the tie-break priority.
    pub section_keywords: BTreeMap<SectionCategory, Vec<String>>,
    /// Keywords that mark a heading without mapping it to an extracted category.
    pub extra_heading_keywords: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        let section_keywords = BTreeMap::from([
            (
                SectionCategory::Profile,
                strings(&["profile", "summary", "objective", "about me"]),
            ),
            (SectionCategory::Education, strings(&["education"])),
            (
                SectionCategory::Experience,
                strings(&["experience", "employment", "work history", "job"]),
            ),
            (SectionCategory::Project, strings(&["project"])),
            (SectionCategory::Skill, strings(&["skill", "technologies"])),
        ]);

        Self {
            line_tolerance: 0.5,
            subsection_gap_multiplier: 1.4,
            default_descriptions_line_index: 1,
            max_featured_skills: 10,
            max_text_items: 10_000,
            section_keywords,
            extra_heading_keywords: strings(&[
                "course",
                "extracurricular",
                "award",
                "honor",
                "achievement",
                "certification",
                "publication",
                "volunteer",
                "leadership",
                "activities",
                "interest",
                "language",
                "reference",
                "hobbies",
            ]),
        }
    }
}

impl ParserConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json_str(json: &str) -> Result<Self, ParseError> {
        let config: ParserConfig =
            serde_json::from_str(json).map_err(|e| ParseError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        if !(self.line_tolerance.is_finite() && self.line_tolerance > 0.0) {
            return Err(ParseError::InvalidConfig(format!(
                "line_tolerance must be a positive number (got {})",
                self.line_tolerance
            )));
        }
        if !(self.subsection_gap_multiplier.is_finite() && self.subsection_gap_multiplier >= 1.0) {
            return Err(ParseError::InvalidConfig(format!(
                "subsection_gap_multiplier must be at least 1.0 (got {})",
                self.subsection_gap_multiplier
            )));
        }
        if self.max_text_items == 0 {
            return Err(ParseError::InvalidConfig(
                "max_text_items must be greater than zero".to_string(),
            ));
        }
        for (category, keywords) in &self.section_keywords {
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ParseError::InvalidConfig(format!(
                    "empty heading keyword for category '{}'",
                    category.as_str()
                )));
            }
        }
        Ok(())
    }

    /// First category, in priority order, with a keyword contained in `text`.
    pub fn category_for_heading(&self, text: &str) -> Option<SectionCategory> {
        let lower = text.to_lowercase();
        self.section_keywords
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(&k.to_lowercase())))
            .map(|(category, _)| *category)
    }

    /// Whether `text` contains any heading keyword, categorized or not.
    pub fn has_heading_keyword(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.category_for_heading(text).is_some()
            || self
                .extra_heading_keywords
                .iter()
                .any(|k| lower.contains(&k.to_lowercase()))
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
