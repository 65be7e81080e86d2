//! Predicates and feature tables shared by the field extractors.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::TextItem;

lazy_static! {
    pub static ref YEAR: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();
    /// Month names and abbreviations, seasons, and open-ended range words.
    pub static ref DATE_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:present|now|current|summer|spring|fall|autumn|winter|jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b"
    )
    .unwrap();
    static ref PARENTHESIZED_NUMBER: Regex = Regex::new(r"\([0-9]+\)").unwrap();
    static ref LEADING_NUMBER: Regex = Regex::new(r"^\s*(\d+(?:\.\d+)?)").unwrap();
}

/// Highest value a leading number may take to still read as a grade (percent scales included).
const MAX_GRADE: f64 = 110.0;

/// A boolean test over one TextItem.
///
/// Pattern-like predicates also report the matched span, which feature sets flagged
/// `match_only` use as a derived candidate.
#[derive(Debug, Clone)]
pub enum Predicate {
    Bold,
    HasLetter,
    HasNumber,
    HasComma,
    HasAt,
    HasSlash,
    HasParenthesizedNumber,
    /// Has a letter and no lower-case letters.
    AllUpperCase,
    WordCountAtLeast(usize),
    WordCountAbove(usize),
    FontSizeAtLeast(f32),
    /// Contains text already selected for another slot. Never matches an empty needle.
    Contains(String),
    /// Case-sensitive substring match against any entry.
    AnySubstring(&'static [&'static str]),
    /// Any whitespace-separated word equals an entry.
    AnyWord(&'static [&'static str]),
    Pattern(&'static Regex),
    /// Text starting with a number no greater than 110.
    Grade,
}

impl Predicate {
    /// Returns the matched span when the predicate holds: the whole text for plain
    /// tests, the regex match for patterns.
    pub fn evaluate<'a>(&self, item: &'a TextItem) -> Option<&'a str> {
        let text = item.text.as_str();
        let holds = match self {
            Predicate::Pattern(regex) => return regex.find(text).map(|m| m.as_str()),
            Predicate::Grade => return leading_grade(text),
            Predicate::Bold => item.is_bold(),
            Predicate::HasLetter => text.chars().any(|c| c.is_ascii_alphabetic()),
            Predicate::HasNumber => text.chars().any(|c| c.is_ascii_digit()),
            Predicate::HasComma => text.contains(','),
            Predicate::HasAt => text.contains('@'),
            Predicate::HasSlash => text.contains('/'),
            Predicate::HasParenthesizedNumber => PARENTHESIZED_NUMBER.is_match(text),
            Predicate::AllUpperCase => {
                text.chars().any(|c| c.is_ascii_alphabetic()) && text.to_uppercase() == text
            }
            Predicate::WordCountAtLeast(n) => item.word_count() >= *n,
            Predicate::WordCountAbove(n) => item.word_count() > *n,
            Predicate::FontSizeAtLeast(size) => item.font_size >= *size,
            Predicate::Contains(needle) => !needle.is_empty() && text.contains(needle.as_str()),
            Predicate::AnySubstring(needles) => needles.iter().any(|n| text.contains(n)),
            Predicate::AnyWord(words) => text.split_whitespace().any(|w| words.contains(&w)),
        };
        holds.then_some(text)
    }

    pub fn matches(&self, item: &TextItem) -> bool {
        self.evaluate(item).is_some()
    }
}

fn leading_grade(text: &str) -> Option<&str> {
    let number = LEADING_NUMBER.captures(text)?.get(1)?;
    let value: f64 = number.as_str().parse().ok()?;
    (value <= MAX_GRADE).then_some(number.as_str())
}

/// A weighted predicate. Negative weights exclude text from a slot.
#[derive(Debug, Clone)]
pub struct FeatureSet {
    pub predicate: Predicate,
    pub weight: i32,
    /// Credit the weight to the matched span as its own candidate instead of the item.
    pub match_only: bool,
}

impl FeatureSet {
    pub fn new(predicate: Predicate, weight: i32) -> Self {
        Self {
            predicate,
            weight,
            match_only: false,
        }
    }

    pub fn matching(predicate: Predicate, weight: i32) -> Self {
        Self {
            predicate,
            weight,
            match_only: true,
        }
    }
}

/// Shared table for every date slot: a year, a month/season/"present" keyword, and no comma.
pub fn date_feature_sets() -> Vec<FeatureSet> {
    vec![
        FeatureSet::matching(Predicate::Pattern(&YEAR), 2),
        FeatureSet::new(Predicate::Pattern(&DATE_KEYWORD), 2),
        FeatureSet::new(Predicate::HasComma, -1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bold, item, styled, REGULAR};

    #[test]
    fn test_pattern_reports_matched_span() {
        let t = item("Jan 2020 - Present", 0.0, 0.0);
        assert_eq!(Predicate::Pattern(&YEAR).evaluate(&t), Some("2020"));
    }

    #[test]
    fn test_plain_predicate_reports_whole_text() {
        let t = bold("Google", 0.0, 0.0);
        assert_eq!(Predicate::Bold.evaluate(&t), Some("Google"));
        assert_eq!(Predicate::HasComma.evaluate(&t), None);
    }

    #[test]
    fn test_date_keywords() {
        for text in ["Summer 2023", "Jan 2020", "Sept 2019", "Present", "current", "May 2021"] {
            assert!(Predicate::Pattern(&DATE_KEYWORD).matches(&item(text, 0.0, 0.0)), "{text}");
        }
        for text in ["Senior Engineer", "Google", "Marketing", "Junior Developer", "Decentralized"] {
            assert!(!Predicate::Pattern(&DATE_KEYWORD).matches(&item(text, 0.0, 0.0)), "{text}");
        }
    }

    #[test]
    fn test_contains_never_matches_empty_needle() {
        let t = item("Google", 0.0, 0.0);
        assert!(!Predicate::Contains(String::new()).matches(&t));
        assert!(Predicate::Contains("oog".to_string()).matches(&t));
    }

    #[test]
    fn test_any_word_matches_whole_words_only() {
        const TITLES: &[&str] = &["Engineer", "Intern"];
        assert!(Predicate::AnyWord(TITLES).matches(&item("Software Engineer", 0.0, 0.0)));
        assert!(!Predicate::AnyWord(TITLES).matches(&item("Internal Tools", 0.0, 0.0)));
    }

    #[test]
    fn test_grade() {
        assert_eq!(Predicate::Grade.evaluate(&item("3.85/4.0", 0.0, 0.0)), Some("3.85"));
        assert_eq!(Predicate::Grade.evaluate(&item("95", 0.0, 0.0)), Some("95"));
        assert_eq!(Predicate::Grade.evaluate(&item("2020", 0.0, 0.0)), None);
        assert_eq!(Predicate::Grade.evaluate(&item("GPA 3.8", 0.0, 0.0)), None);
    }

    #[test]
    fn test_all_upper_case_requires_letter() {
        assert!(Predicate::AllUpperCase.matches(&item("JANE DOE", 0.0, 0.0)));
        assert!(!Predicate::AllUpperCase.matches(&item("2020", 0.0, 0.0)));
        assert!(!Predicate::AllUpperCase.matches(&item("Jane", 0.0, 0.0)));
    }

    #[test]
    fn test_font_size_at_least() {
        let big = styled("Jane Doe", 0.0, 0.0, REGULAR, 22.0);
        assert!(Predicate::FontSizeAtLeast(22.0).matches(&big));
        assert!(!Predicate::FontSizeAtLeast(22.0).matches(&item("Jane", 0.0, 0.0)));
    }
}
