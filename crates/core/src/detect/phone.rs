//! North-American style phone numbers
//!
//! Only the whole (trimmed) input is matched, and only against a closed list
//! of punctuation templates. Templates are tried 7-digit, then 10-digit, then
//! 11-digit (US before international), and the first match wins.

use std::sync::OnceLock;

use regex::Regex;

use crate::record::{Detection, Payload, PhoneLength, PhoneNumber};

/// How the matched digits are laid out in display and `tel:` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Seven,
    Ten,
    /// Leading literal `1`
    UsEleven,
    /// Leading `+` and a single country-code digit
    IntlEleven,
}

/// Accepted templates per shape, in matching order
const SEVEN_DIGIT: [&str; 3] = [
    r"^([0-9]{7})$",
    r"^([0-9]{3})-([0-9]{4})$",
    r"^([0-9]{3})\.([0-9]{4})$",
];

const TEN_DIGIT: [&str; 6] = [
    r"^([0-9]{10})$",
    r"^([0-9]{3})-([0-9]{3})-([0-9]{4})$",
    r"^([0-9]{3})\.([0-9]{3})\.([0-9]{4})$",
    r"^\(([0-9]{3})\) ([0-9]{3})-([0-9]{4})$",
    r"^\(([0-9]{3})\)([0-9]{3})-([0-9]{4})$",
    r"^\(([0-9]{3})\)([0-9]{7})$",
];

const US_ELEVEN_DIGIT: [&str; 6] = [
    r"^(1)([0-9]{10})$",
    r"^(1)-([0-9]{3})-([0-9]{3})-([0-9]{4})$",
    r"^(1)\.([0-9]{3})\.([0-9]{3})\.([0-9]{4})$",
    r"^(1) \(([0-9]{3})\) ([0-9]{3})-([0-9]{4})$",
    r"^(1)\(([0-9]{3})\)([0-9]{3})-([0-9]{4})$",
    r"^(1)\(([0-9]{3})\)([0-9]{7})$",
];

const INTL_ELEVEN_DIGIT: [&str; 6] = [
    r"^\+([0-9])([0-9]{10})$",
    r"^\+([0-9])-([0-9]{3})-([0-9]{3})-([0-9]{4})$",
    r"^\+([0-9])\.([0-9]{3})\.([0-9]{3})\.([0-9]{4})$",
    r"^\+([0-9]) \(([0-9]{3})\) ([0-9]{3})-([0-9]{4})$",
    r"^\+([0-9])\(([0-9]{3})\)([0-9]{3})-([0-9]{4})$",
    r"^\+([0-9])\(([0-9]{3})\)([0-9]{7})$",
];

static COMPILED_TEMPLATES: OnceLock<Vec<(Shape, Regex)>> = OnceLock::new();

fn templates() -> &'static [(Shape, Regex)] {
    COMPILED_TEMPLATES.get_or_init(|| {
        let groups = [
            (Shape::Seven, &SEVEN_DIGIT[..]),
            (Shape::Ten, &TEN_DIGIT[..]),
            (Shape::UsEleven, &US_ELEVEN_DIGIT[..]),
            (Shape::IntlEleven, &INTL_ELEVEN_DIGIT[..]),
        ];
        groups
            .into_iter()
            .flat_map(|(shape, patterns)| {
                patterns
                    .iter()
                    .map(move |pattern| (shape, Regex::new(pattern).unwrap()))
            })
            .collect()
    })
}

/// Detect a phone number
pub fn detect(input: &str) -> Option<Detection> {
    let found = match_templates(input.trim())?;
    Some(record(input, found))
}

/// A template hit: the shape, the matched text and its captured digits
struct Match<'a> {
    shape: Shape,
    matched: &'a str,
    digits: String,
}

/// First template matching `text`
fn match_templates(text: &str) -> Option<Match<'_>> {
    templates().iter().find_map(|(shape, regex)| {
        let caps = regex.captures(text)?;
        let digits: String = caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
        Some(Match {
            shape: *shape,
            matched: caps.get(0)?.as_str(),
            digits,
        })
    })
}

/// Build the record; a match shorter than the trimmed input scores lower
fn record(input: &str, found: Match<'_>) -> Detection {
    let (length, formatted_display, tel_url) = layout(found.shape, &found.digits);
    let is_exact_match = input.trim() == found.matched;
    let confidence = if is_exact_match { 95 } else { 60 };

    Detection::new(
        input,
        confidence,
        Payload::Phone(PhoneNumber {
            length,
            raw_number: found.matched.to_string(),
            formatted_display,
            tel_url,
            is_exact_match,
        }),
    )
}

/// `(length, display, tel target)` for a run of ASCII digits
fn layout(shape: Shape, digits: &str) -> (PhoneLength, String, String) {
    match shape {
        Shape::Seven => (
            PhoneLength::Seven,
            format!("{}-{}", &digits[..3], &digits[3..]),
            digits.to_string(),
        ),
        Shape::Ten => (
            PhoneLength::Ten,
            format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
            digits.to_string(),
        ),
        Shape::UsEleven => (
            PhoneLength::Eleven,
            format!("1-{}-{}-{}", &digits[1..4], &digits[4..7], &digits[7..]),
            format!("+1{}", &digits[1..]),
        ),
        Shape::IntlEleven => (
            PhoneLength::Eleven,
            format!(
                "+{}-{}-{}-{}",
                &digits[..1],
                &digits[1..4],
                &digits[4..7],
                &digits[7..]
            ),
            format!("+{digits}"),
        ),
    }
}
