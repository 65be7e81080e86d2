use tracing::debug;

use crate::bullets::split_header_and_descriptions;
use crate::config::ParserConfig;
use crate::models::{flatten_lines, Line, ResumeProject};
use crate::scoring::{date_feature_sets, text_with_highest_score, FeatureSet, Predicate, ScoreOptions};
use crate::sections::{divide_section_into_subsections, ResumeSections, SectionCategory};

pub fn extract_projects(sections: &ResumeSections, config: &ParserConfig) -> Vec<ResumeProject> {
    let lines = sections.lines_for(SectionCategory::Project);
    divide_section_into_subsections(lines, config.subsection_gap_multiplier)
        .iter()
        .map(|subsection| extract_project(subsection, config))
        .collect()
}

fn extract_project(lines: &[Line], config: &ParserConfig) -> ResumeProject {
    let split = split_header_and_descriptions(lines, config.default_descriptions_line_index);
    let header = flatten_lines(&split.header_lines);

    let date = text_with_highest_score(&header, &date_feature_sets(), ScoreOptions::strict()).text;
    let features = vec![
        FeatureSet::new(Predicate::Bold, 2),
        FeatureSet::new(Predicate::Contains(date.clone()), -4),
    ];
    let project = text_with_highest_score(&header, &features, ScoreOptions::with_fallback()).text;

    debug!(%project, %date, descriptions = split.descriptions.len(), "Extracted project");
    ResumeProject {
        project,
        date,
        descriptions: split.descriptions,
    }
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
                heading: "PROJECTS".to_string(),
                category: Some(SectionCategory::Project),
                lines,
            },
        ])
    }

    #[test]
    fn test_bold_name_with_season_date() {
        let lines = vec![
            Line::new(vec![bold("E-Commerce Platform", 40.0, 100.0), item("Summer 2023", 400.0, 100.0)]),
            line(&["- Built full-stack app using React"], 112.0),
        ];
        let projects = extract_projects(&sections(lines), &ParserConfig::default());
        assert_eq!(
            projects,
            vec![ResumeProject {
                project: "E-Commerce Platform".to_string(),
                date: "Summer 2023".to_string(),
                descriptions: vec!["Built full-stack app using React".to_string()],
            }]
        );
    }

    #[test]
    fn test_unbolded_name_falls_back_to_first_item() {
        let lines = vec![
            line(&["Compiler Toolkit", "2021"], 100.0),
            line(&["Wrote a register allocator"], 112.0),
        ];
        let projects = extract_projects(&sections(lines), &ParserConfig::default());
        assert_eq!(projects[0].project, "Compiler Toolkit");
        assert_eq!(projects[0].date, "2021");
        assert_eq!(projects[0].descriptions, vec!["Wrote a register allocator"]);
    }

    #[test]
    fn test_each_bold_header_starts_a_project() {
        let lines = vec![
            Line::new(vec![bold("Raft KV Store", 40.0, 100.0)]),
            line(&["- Linearizable reads"], 112.0),
            Line::new(vec![bold("Tiny Shell", 40.0, 124.0)]),
            line(&["- Job control"], 136.0),
        ];
        let projects = extract_projects(&sections(lines), &ParserConfig::default());
        let names: Vec<&str> = projects.iter().map(|p| p.project.as_str()).collect();
        assert_eq!(names, vec!["Raft KV Store", "Tiny Shell"]);
        assert_eq!(projects[1].descriptions, vec!["Job control"]);
    }

    #[test]
    fn test_missing_section_yields_no_projects() {
        let sections = ResumeSections::new(vec![Section::preamble()]);
        assert!(extract_projects(&sections, &ParserConfig::default()).is_empty());
    }
}
