//! Field extractors and the resume assembler.
//!
//! Every extractor follows the same path: look up its section, divide it into
//! subsections, split each subsection into header and description lines, then score
//! the header items once per slot with a slot-specific feature table.

pub mod education;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod work_experience;

use crate::config::ParserConfig;
use crate::models::{Resume, ResumeCustom};
use crate::sections::ResumeSections;

pub use education::extract_educations;
pub use profile::extract_profile;
pub use projects::extract_projects;
pub use skills::extract_skills;
pub use work_experience::extract_work_experiences;

/// Runs the five extractors and combines their output. Custom descriptions are never
/// inferred.
pub fn extract_resume_from_sections(sections: &ResumeSections, config: &ParserConfig) -> Resume {
    Resume {
        profile: extract_profile(sections),
        educations: extract_educations(sections, config),
        work_experiences: extract_work_experiences(sections, config),
        projects: extract_projects(sections, config),
        skills: extract_skills(sections, config),
        custom: ResumeCustom::default(),
    }
}
