use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::bullets::{bullet_points_from_lines, descriptions_line_index};
use crate::config::ParserConfig;
use crate::models::{flatten_lines, Line, ResumeEducation};
use crate::scoring::{date_feature_sets, text_with_highest_score, FeatureSet, Predicate, ScoreOptions};
use crate::sections::{divide_section_into_subsections, ResumeSections, SectionCategory};

const SCHOOLS: &[&str] = &["College", "University", "Institute", "School", "Academy"];
const DEGREES: &[&str] = &["Associate", "Bachelor", "Master", "Doctor", "PhD", "Ph.D", "Diploma"];

lazy_static! {
    static ref DEGREE_ABBREVIATION: Regex =
        Regex::new(r"\b(?:B\.?S|B\.?A|B\.?Sc|B\.?Eng|B\.?Tech|M\.?S|M\.?Sc|M\.?Eng|MBA|Ph\.?D)\b").unwrap();
    static ref GPA: Regex = Regex::new(r"[0-4]\.\d{1,2}").unwrap();
}

const COURSE_HEADINGS: &[&str] = &["course"];

pub fn extract_educations(sections: &ResumeSections, config: &ParserConfig) -> Vec<ResumeEducation> {
    let lines = sections.lines_for(SectionCategory::Education);
    let mut educations: Vec<ResumeEducation> = divide_section_into_subsections(lines, config.subsection_gap_multiplier)
        .iter()
        .map(|subsection| extract_education(subsection))
        .collect();

    let courses = flatten_lines(sections.lines_by_keywords(COURSE_HEADINGS))
        .iter()
        .map(|item| item.text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>();
    if !courses.is_empty() {
        if let Some(first) = educations.first_mut() {
            first.descriptions.push(format!("Courses: {}", courses.join(" ")));
        }
    }

    educations
}

fn extract_education(lines: &[Line]) -> ResumeEducation {
    // Descriptions are only taken from a line that actually looks like one, since
    // degree, school and GPA often each sit on their own header line.
    let index = descriptions_line_index(lines);
    let header = flatten_lines(&lines[..index.unwrap_or(lines.len())]);

    let date = text_with_highest_score(&header, &date_feature_sets(), ScoreOptions::strict()).text;
    let school = text_with_highest_score(&header, &school_features(&date), ScoreOptions::strict()).text;
    let degree = text_with_highest_score(&header, &degree_features(&date), ScoreOptions::strict()).text;
    let gpa = text_with_highest_score(&header, &gpa_features(), ScoreOptions::strict()).text;
    let descriptions = index
        .map(|i| bullet_points_from_lines(&lines[i..]))
        .unwrap_or_default();

    debug!(%school, %degree, %gpa, %date, descriptions = descriptions.len(), "Extracted education");
    ResumeEducation {
        school,
        degree,
        gpa,
        date,
        descriptions,
    }
}

fn school_features(date: &str) -> Vec<FeatureSet> {
    vec![
        FeatureSet::new(Predicate::AnySubstring(SCHOOLS), 4),
        FeatureSet::new(Predicate::AnySubstring(DEGREES), -4),
        FeatureSet::new(Predicate::Pattern(&DEGREE_ABBREVIATION), -4),
        FeatureSet::new(Predicate::HasNumber, -4),
        FeatureSet::new(Predicate::Bold, 1),
        FeatureSet::new(Predicate::Contains(date.to_string()), -4),
    ]
}

fn degree_features(date: &str) -> Vec<FeatureSet> {
    vec![
        FeatureSet::new(Predicate::AnySubstring(DEGREES), 4),
        FeatureSet::new(Predicate::Pattern(&DEGREE_ABBREVIATION), 4),
        FeatureSet::new(Predicate::AnySubstring(SCHOOLS), -4),
        FeatureSet::new(Predicate::HasNumber, -3),
        FeatureSet::new(Predicate::Bold, 1),
        FeatureSet::new(Predicate::Contains(date.to_string()), -4),
    ]
}

fn gpa_features() -> Vec<FeatureSet> {
    vec![
        FeatureSet::matching(Predicate::Pattern(&GPA), 4),
        FeatureSet::matching(Predicate::Grade, 3),
        FeatureSet::new(Predicate::HasComma, -3),
        FeatureSet::new(Predicate::HasLetter, -4),
    ]
}
