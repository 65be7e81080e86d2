//! Heuristic completeness report over an extracted resume.

use serde::{Deserialize, Serialize};

use crate::models::{Resume, ResumeEducation, ResumeProfile, ResumeProject, ResumeWorkExperience};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Strong,
    Moderate,
    Weak,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionHealth {
    pub section: String,
    pub score: f64,
    pub entry_count: usize,
    /// Description bullets without a number, percentage or amount.
    pub missing_quantification: usize,
    pub status: SectionStatus,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    /// Point score out of 100 over the headline fields, see [`accuracy_score()`].
    pub accuracy_score: u32,
    pub overall_score: f64,
    pub sections: Vec<SectionHealth>,
    pub total_entries: usize,
    pub missing_sections: Vec<String>,
}

const SECTION_WEIGHTS: &[(&str, f64)] = &[
    ("profile", 0.25),
    ("experience", 0.30),
    ("education", 0.15),
    ("project", 0.15),
    ("skill", 0.15),
];

const ACCURACY_SCORE_CAP: u32 = 100;

/// Featured skills plus skill bullets at which the skills section counts as complete.
const FULL_SKILL_COUNT: usize = 5;

/// Per-section measurements before status and recommendations are derived.
struct SectionMeasure {
    score: f64,
    entry_count: usize,
    missing_quantification: usize,
}

pub fn compute_completeness_report(resume: &Resume) -> CompletenessReport {
    let mut section_healths = Vec::new();
    let mut weighted_score_sum = 0.0;
    let mut missing_sections = Vec::new();
    let mut total_entries = 0;

    for (section_key, weight) in SECTION_WEIGHTS {
        let measure = measure_section(resume, section_key);
        total_entries += measure.entry_count;

        if measure.entry_count == 0 {
            missing_sections.push(section_key.to_string());
            section_healths.push(SectionHealth {
                section: section_key.to_string(),
                score: 0.0,
                entry_count: 0,
                missing_quantification: 0,
                status: SectionStatus::Missing,
                recommendations: vec![format!(
                    "Add a {} section so it can be picked up from the resume",
                    section_key
                )],
            });
            continue;
        }

        let status = match measure.score {
            s if s >= 0.8 => SectionStatus::Strong,
            s if s >= 0.5 => SectionStatus::Moderate,
            s if s >= 0.2 => SectionStatus::Weak,
            _ => SectionStatus::Missing,
        };

        let mut recommendations = Vec::new();
        if measure.missing_quantification > 0 {
            recommendations.push(format!(
                "{} {} bullets lack a quantified outcome; add numbers, percentages or amounts",
                measure.missing_quantification, section_key
            ));
        }
        if measure.score < 0.8 {
            recommendations.push(format!(
                "Some {} fields could not be extracted; check dates, names and bullet markers",
                section_key
            ));
        }
        if measure.entry_count < 2 && *section_key == "experience" {
            recommendations
                .push("Add more experience entries to build a complete picture".to_string());
        }

        weighted_score_sum += measure.score * weight;
        section_healths.push(SectionHealth {
            section: section_key.to_string(),
            score: measure.score,
            entry_count: measure.entry_count,
            missing_quantification: measure.missing_quantification,
            status,
            recommendations,
        });
    }

    let total_weight: f64 = SECTION_WEIGHTS.iter().map(|(_, w)| w).sum();
    let overall_score = if total_weight > 0.0 {
        (weighted_score_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CompletenessReport {
        accuracy_score: accuracy_score(resume),
        overall_score,
        sections: section_healths,
        total_entries,
        missing_sections,
    }
}

/// Points for the fields a reader looks at first:
///
/// | field                                 | points  |
/// |---------------------------------------|---------|
/// | name, email                           | 10 each |
/// | phone, location                       | 5 each  |
/// | any work experience                   | 15      |
/// | any work experience with descriptions | +10     |
/// | any education                         | 10      |
/// | any education with a degree           | +10     |
/// | featured skills                       | 15      |
/// | any project                           | 10      |
///
/// Capped at 100.
pub fn accuracy_score(resume: &Resume) -> u32 {
    let profile = &resume.profile;
    let mut score = 0;

    if !profile.name.is_empty() {
        score += 10;
    }
    if !profile.email.is_empty() {
        score += 10;
    }
    if !profile.phone.is_empty() {
        score += 5;
    }
    if !profile.location.is_empty() {
        score += 5;
    }

    if !resume.work_experiences.is_empty() {
        score += 15;
        if resume.work_experiences.iter().any(|w| !w.descriptions.is_empty()) {
            score += 10;
        }
    }

    if !resume.educations.is_empty() {
        score += 10;
        if resume.educations.iter().any(|e| !e.degree.is_empty()) {
            score += 10;
        }
    }

    if !resume.skills.featured_skills.is_empty() {
        score += 15;
    }
    if !resume.projects.is_empty() {
        score += 10;
    }

    score.min(ACCURACY_SCORE_CAP)
}

fn measure_section(resume: &Resume, section_key: &str) -> SectionMeasure {
    match section_key {
        "profile" => profile_measure(&resume.profile),
        "experience" => entries_measure(&resume.work_experiences, work_fields, |w| &w.descriptions, true),
        "education" => entries_measure(&resume.educations, education_fields, |e| &e.descriptions, false),
        "project" => entries_measure(&resume.projects, project_fields, |p| &p.descriptions, true),
        "skill" => {
            let count = resume.skills.featured_skills.len() + resume.skills.descriptions.len();
            SectionMeasure {
                score: (count as f64 / FULL_SKILL_COUNT as f64).min(1.0),
                entry_count: count,
                missing_quantification: 0,
            }
        }
        _ => SectionMeasure {
            score: 0.0,
            entry_count: 0,
            missing_quantification: 0,
        },
    }
}

fn profile_measure(profile: &ResumeProfile) -> SectionMeasure {
    let fields = [
        &profile.name,
        &profile.email,
        &profile.phone,
        &profile.location,
        &profile.url,
        &profile.summary,
    ];
    let filled = fields.iter().filter(|f| !f.is_empty()).count();
    SectionMeasure {
        score: filled as f64 / fields.len() as f64,
        entry_count: usize::from(filled > 0),
        missing_quantification: 0,
    }
}

/// Averages field coverage per entry; entries whose bullets are judged also weigh in
/// the share of quantified bullets.
fn entries_measure<T>(
    entries: &[T],
    fields: fn(&T) -> Vec<&str>,
    descriptions: fn(&T) -> &Vec<String>,
    judge_bullets: bool,
) -> SectionMeasure {
    let mut sum = 0.0;
    let mut missing_quantification = 0;

    for entry in entries {
        let values = fields(entry);
        let filled = values.iter().filter(|v| !v.is_empty()).count() as f64;
        let coverage = filled / values.len().max(1) as f64;

        let bullets = descriptions(entry);
        let entry_score = if judge_bullets {
            let quantified = bullets.iter().filter(|b| is_quantified(b)).count();
            missing_quantification += bullets.len() - quantified;
            let impact = if bullets.is_empty() {
                0.0
            } else {
                quantified as f64 / bullets.len() as f64
            };
            0.6 * coverage + 0.4 * impact
        } else {
            coverage
        };
        sum += entry_score;
    }

    let score = if entries.is_empty() {
        0.0
    } else {
        (sum / entries.len() as f64).clamp(0.0, 1.0)
    };
    SectionMeasure {
        score,
        entry_count: entries.len(),
        missing_quantification,
    }
}

fn work_fields(work: &ResumeWorkExperience) -> Vec<&str> {
    vec![work.company.as_str(), work.job_title.as_str(), work.date.as_str()]
}

fn education_fields(education: &ResumeEducation) -> Vec<&str> {
    vec![education.school.as_str(), education.degree.as_str(), education.date.as_str()]
}

fn project_fields(project: &ResumeProject) -> Vec<&str> {
    vec![project.project.as_str(), project.date.as_str()]
}

/// A bullet is quantified when it carries a digit, a percentage or a currency amount.
pub fn is_quantified(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        || text.contains('%')
        || text.contains('$')
        || text.contains('€')
        || text.contains('£')
}
