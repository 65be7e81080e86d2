//! Profile extraction from the lines preceding the first heading.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::{flatten_lines, Line, ResumeProfile, TextItem};
use crate::scoring::{text_with_highest_score, FeatureSet, Predicate, ScoreOptions};
use crate::sections::ResumeSections;

lazy_static! {
    static ref NAME_CHARS: Regex = Regex::new(r"^[a-zA-Z\s\.]+$").unwrap();
    static ref EMAIL: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
    static ref PHONE: Regex = Regex::new(r"\(?\d{3}\)?[\s-]?\d{3}[\s-]?\d{4}").unwrap();
    static ref CITY_STATE: Regex = Regex::new(r"[A-Z][a-zA-Z\s]+, [A-Z]{2}").unwrap();
    static ref URL_PATH: Regex = Regex::new(r"\S+\.[a-z]+/\S+").unwrap();
    static ref URL_HTTP: Regex = Regex::new(r"https?://\S+\.\S+").unwrap();
    static ref URL_WWW: Regex = Regex::new(r"www\.\S+\.\S+").unwrap();
}

/// Headings whose body replaces the scored summary, in precedence order.
const SUMMARY_HEADINGS: &[&str] = &["summary", "objective"];

pub fn extract_profile(sections: &ResumeSections) -> ResumeProfile {
    let items = flatten_lines(sections.preamble_lines());

    let name = best(&items, &name_features(&items), "name");
    let email = best(&items, &email_features(), "email");
    let phone = best(&items, &phone_features(), "phone");
    let location = best(&items, &location_features(), "location");
    let url = best(&items, &url_features(), "url");

    let summary = SUMMARY_HEADINGS
        .iter()
        .map(|heading| section_text(sections.lines_by_keywords(&[*heading])))
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| {
            let options = ScoreOptions {
                concatenate_ties: true,
                ..ScoreOptions::strict()
            };
            text_with_highest_score(&items, &summary_features(), options).text
        });

    ResumeProfile {
        name,
        email,
        phone,
        location,
        url,
        summary,
    }
}

fn best(items: &[TextItem], features: &[FeatureSet], slot: &str) -> String {
    let scored = text_with_highest_score(items, features, ScoreOptions::strict());
    debug!(slot, selected = %scored.text, candidates = scored.scores.len(), "Scored profile slot");
    scored.text
}

fn section_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(Line::text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Penalties shared by every slot that should never hold contact details.
fn contact_penalties() -> Vec<FeatureSet> {
    vec![
        FeatureSet::new(Predicate::HasAt, -4),
        FeatureSet::new(Predicate::HasParenthesizedNumber, -4),
        FeatureSet::new(Predicate::HasComma, -4),
        FeatureSet::new(Predicate::HasSlash, -4),
    ]
}

fn name_features(items: &[TextItem]) -> Vec<FeatureSet> {
    let mut features = vec![
        FeatureSet::matching(Predicate::Pattern(&NAME_CHARS), 3),
        FeatureSet::new(Predicate::Bold, 2),
        FeatureSet::new(Predicate::AllUpperCase, 2),
        FeatureSet::new(Predicate::HasNumber, -4),
        FeatureSet::new(Predicate::WordCountAtLeast(4), -2),
    ];
    features.extend(contact_penalties());

    // The name is usually set larger than everything else, but only a varying
    // size says anything.
    let sizes = items.iter().map(|item| item.font_size);
    let largest = sizes.clone().fold(f32::MIN, f32::max);
    let smallest = sizes.fold(f32::MAX, f32::min);
    if largest > smallest {
        features.push(FeatureSet::new(Predicate::FontSizeAtLeast(largest), 2));
    }
    features
}

fn email_features() -> Vec<FeatureSet> {
    vec![
        FeatureSet::matching(Predicate::Pattern(&EMAIL), 4),
        FeatureSet::new(Predicate::Bold, -1),
        FeatureSet::new(Predicate::AllUpperCase, -1),
        FeatureSet::new(Predicate::HasParenthesizedNumber, -4),
        FeatureSet::new(Predicate::HasComma, -4),
        FeatureSet::new(Predicate::HasSlash, -4),
        FeatureSet::new(Predicate::WordCountAtLeast(4), -4),
    ]
}

fn phone_features() -> Vec<FeatureSet> {
    vec![
        FeatureSet::matching(Predicate::Pattern(&PHONE), 4),
        FeatureSet::new(Predicate::HasLetter, -4),
    ]
}

fn location_features() -> Vec<FeatureSet> {
    vec![
        FeatureSet::matching(Predicate::Pattern(&CITY_STATE), 4),
        FeatureSet::new(Predicate::Bold, -1),
        FeatureSet::new(Predicate::HasAt, -4),
        FeatureSet::new(Predicate::HasParenthesizedNumber, -3),
        FeatureSet::new(Predicate::HasSlash, -4),
    ]
}

fn url_features() -> Vec<FeatureSet> {
    vec![
        FeatureSet::matching(Predicate::Pattern(&URL_PATH), 4),
        FeatureSet::matching(Predicate::Pattern(&URL_HTTP), 3),
        FeatureSet::matching(Predicate::Pattern(&URL_WWW), 3),
        FeatureSet::new(Predicate::Bold, -1),
        FeatureSet::new(Predicate::HasAt, -4),
        FeatureSet::new(Predicate::HasParenthesizedNumber, -3),
        FeatureSet::new(Predicate::HasComma, -4),
        FeatureSet::new(Predicate::WordCountAtLeast(4), -4),
    ]
}

fn summary_features() -> Vec<FeatureSet> {
    vec![
        FeatureSet::new(Predicate::WordCountAtLeast(4), 4),
        FeatureSet::new(Predicate::Bold, -1),
        FeatureSet::new(Predicate::HasAt, -4),
        FeatureSet::new(Predicate::HasParenthesizedNumber, -3),
        FeatureSet::new(Predicate::Pattern(&CITY_STATE), -4),
    ]
}
