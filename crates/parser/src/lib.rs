//! Deterministic resume extraction from positioned PDF text.
//!
//! The engine is a pure pipeline:
//!
//! ```text
//! TextItem[] → lines → sections → subsections → header/descriptions → scored slots → Resume
//! ```
//!
//! No model is involved. Every field is chosen by a weighted-predicate scorer over the
//! candidate text items of its section, so the same input always yields the same
//! `Resume`.

pub mod bullets;
pub mod completeness;
pub mod config;
pub mod errors;
pub mod extract;
pub mod lines;
pub mod models;
pub mod scoring;
pub mod sections;

#[cfg(test)]
mod test_support;

use tracing::{debug, warn};

pub use completeness::{accuracy_score, compute_completeness_report, CompletenessReport, SectionHealth, SectionStatus};
pub use config::ParserConfig;
pub use errors::ParseError;
pub use models::{
    Line, Resume, ResumeCustom, ResumeEducation, ResumeProfile, ResumeProject, ResumeSkills,
    ResumeWorkExperience, TextItem,
};
pub use sections::{ResumeSections, Section, SectionCategory};

/// A configured extraction engine. Holds no per-document state, so one instance can
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    config: ParserConfig,
}

impl ResumeParser {
    pub fn new(config: ParserConfig) -> Result<Self, ParseError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Extracts a resume from one document's text items, in reading order.
    ///
    /// An empty stream yields an empty resume. Non-finite coordinates, negative sizes
    /// or a stream above `max_text_items` are rejected.
    pub fn parse(&self, items: &[TextItem]) -> Result<Resume, ParseError> {
        if items.len() > self.config.max_text_items {
            warn!(
                count = items.len(),
                limit = self.config.max_text_items,
                "Rejected oversized text item stream"
            );
            return Err(ParseError::TooManyTextItems {
                count: items.len(),
                limit: self.config.max_text_items,
            });
        }
        for (index, item) in items.iter().enumerate() {
            item.validate(index)?;
        }
        if items.is_empty() {
            return Ok(Resume::default());
        }

        let sections = self.sections(items);
        let resume = extract::extract_resume_from_sections(&sections, &self.config);
        debug!(
            items = items.len(),
            sections = sections.sections().len(),
            educations = resume.educations.len(),
            work_experiences = resume.work_experiences.len(),
            projects = resume.projects.len(),
            "Parsed resume"
        );
        Ok(resume)
    }

    /// Line grouping and section classification only, for callers that want to
    /// inspect how a document was split.
    pub fn sections(&self, items: &[TextItem]) -> ResumeSections {
        let lines = lines::group_text_items_into_lines(items, &self.config);
        sections::group_lines_into_sections(&lines, &self.config)
    }
}

/// Parses with the default configuration.
pub fn parse_resume(items: &[TextItem]) -> Result<Resume, ParseError> {
    ResumeParser::default().parse(items)
}
