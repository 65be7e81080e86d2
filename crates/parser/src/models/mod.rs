pub mod resume;
pub mod text;

pub use resume::{
    Resume, ResumeCustom, ResumeEducation, ResumeProfile, ResumeProject, ResumeSkills,
    ResumeWorkExperience,
};
pub use text::{flatten_lines, Line, TextItem};
