use tracing::debug;

use crate::bullets::split_header_and_descriptions;
use crate::config::ParserConfig;
use crate::models::{flatten_lines, Line, ResumeWorkExperience, TextItem};
use crate::scoring::{date_feature_sets, text_with_highest_score, FeatureSet, Predicate, ScoreOptions};
use crate::sections::{divide_section_into_subsections, ResumeSections, SectionCategory};

/// Whole words that mark a job title. Matched case-sensitively.
const JOB_TITLES: &[&str] = &[
    "Accountant", "Administrator", "Advisor", "Agent", "Analyst", "Apprentice", "Architect",
    "Assistant", "Associate", "Auditor", "Bartender", "Biologist", "Bookkeeper", "Buyer",
    "Carpenter", "Cashier", "CEO", "Clerk", "Co-op", "Co-Founder", "Consultant", "Coordinator",
    "CTO", "Developer", "Designer", "Director", "Driver", "Editor", "Electrician", "Engineer",
    "Extern", "Founder", "Freelancer", "Head", "Intern", "Janitor", "Journalist", "Laborer",
    "Lawyer", "Lead", "Manager", "Mechanic", "Member", "Nurse", "Officer", "Operator",
    "Operation", "Photographer", "President", "Producer", "Recruiter", "Representative",
    "Researcher", "Sales", "Server", "Scientist", "Specialist", "Supervisor", "Teacher",
    "Technician", "Trader", "Trainee", "Treasurer", "Tutor", "Vice", "VP", "Volunteer",
    "Webmaster", "Worker",
];

pub fn extract_work_experiences(
    sections: &ResumeSections,
    config: &ParserConfig,
) -> Vec<ResumeWorkExperience> {
    let lines = sections.lines_for(SectionCategory::Experience);
    divide_section_into_subsections(lines, config.subsection_gap_multiplier)
        .iter()
        .map(|subsection| extract_work_experience(subsection, config))
        .collect()
}

fn extract_work_experience(lines: &[Line], config: &ParserConfig) -> ResumeWorkExperience {
    let split = split_header_and_descriptions(lines, config.default_descriptions_line_index);
    let header = flatten_lines(&split.header_lines);

    let date = text_with_highest_score(&header, &date_feature_sets(), ScoreOptions::strict()).text;
    let company =
        text_with_highest_score(&header, &company_features(&date), ScoreOptions::with_fallback()).text;

    // The title is picked among whatever the company and date did not claim.
    let remaining: Vec<TextItem> = header
        .into_iter()
        .filter(|item| item.text != company)
        .filter(|item| date.is_empty() || !item.text.contains(date.as_str()))
        .collect();
    let job_title =
        text_with_highest_score(&remaining, &job_title_features(), ScoreOptions::with_fallback()).text;

    debug!(%company, job_title = %job_title, %date, "Extracted work experience");
    ResumeWorkExperience {
        company,
        job_title,
        date,
        descriptions: split.descriptions,
    }
}

fn company_features(date: &str) -> Vec<FeatureSet> {
    vec![
        FeatureSet::new(Predicate::Bold, 2),
        FeatureSet::new(Predicate::Contains(date.to_string()), -4),
        FeatureSet::new(Predicate::AnyWord(JOB_TITLES), -4),
    ]
}

fn job_title_features() -> Vec<FeatureSet> {
    vec![
        FeatureSet::new(Predicate::AnyWord(JOB_TITLES), 4),
        FeatureSet::new(Predicate::HasNumber, -4),
        FeatureSet::new(Predicate::WordCountAbove(5), -2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::Section;
    use crate::test_support::{bold, item, line};

    fn sections(lines: Vec<Line>) -> ResumeSections {
        ResumeSections::new(vec![
            Section::preamble(),
            Section {
                heading: "WORK EXPERIENCE".to_string(),
                category: Some(SectionCategory::Experience),
                lines,
            },
        ])
    }

    #[test]
    fn test_extracts_company_title_and_date() {
        let lines = vec![
            Line::new(vec![bold("Google", 40.0, 100.0), item("Jan 2020 - Present", 400.0, 100.0)]),
            Line::new(vec![item("Senior Engineer", 40.0, 112.0)]),
            line(&["• Led the search indexing rewrite"], 124.0),
            line(&["• Cut p99 latency by 40%"], 136.0),
        ];
        let jobs = extract_work_experiences(&sections(lines), &ParserConfig::default());
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company, "Google");
        assert_eq!(jobs[0].job_title, "Senior Engineer");
        assert_eq!(jobs[0].date, "Jan 2020 - Present");
        assert_eq!(
            jobs[0].descriptions,
            vec!["Led the search indexing rewrite", "Cut p99 latency by 40%"]
        );
    }

    #[test]
    fn test_splits_jobs_on_blank_line_gap() {
        let lines = vec![
            line(&["Acme Corp", "2018 - 2020"], 100.0),
            line(&["Software Developer"], 112.0),
            line(&["- Built billing"], 124.0),
            line(&["Globex", "Summer 2017"], 150.0),
            line(&["Intern"], 162.0),
            line(&["- Wrote tests"], 174.0),
        ];
        let jobs = extract_work_experiences(&sections(lines), &ParserConfig::default());
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].company, "Acme Corp");
        assert_eq!(jobs[0].job_title, "Software Developer");
        assert_eq!(jobs[1].company, "Globex");
        assert_eq!(jobs[1].job_title, "Intern");
        assert_eq!(jobs[1].date, "Summer 2017");
    }

    #[test]
    fn test_title_on_company_line_is_not_the_company() {
        let lines = vec![
            Line::new(vec![bold("Data Analyst", 40.0, 100.0), bold("Initech", 240.0, 100.0)]),
            line(&["- Automated reports"], 112.0),
        ];
        let jobs = extract_work_experiences(&sections(lines), &ParserConfig::default());
        assert_eq!(jobs[0].company, "Initech");
        assert_eq!(jobs[0].job_title, "Data Analyst");
        assert_eq!(jobs[0].date, "");
    }

    #[test]
    fn test_missing_section_yields_no_experience() {
        let sections = ResumeSections::new(vec![Section::preamble()]);
        assert!(extract_work_experiences(&sections, &ParserConfig::default()).is_empty());
    }
}
