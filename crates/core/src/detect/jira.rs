//! Bare JIRA issue keys, with or without a pasted description
//!
//! Only keys whose project prefix is listed in the configuration are
//! recognized; anything else is left for the other detectors.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::Config;
use crate::record::{Detection, Payload};

static ISSUE_KEY_REGEX: OnceLock<Regex> = OnceLock::new();

fn issue_key_regex() -> &'static Regex {
    ISSUE_KEY_REGEX.get_or_init(|| Regex::new(r"^[A-Z]+-[0-9]+$").unwrap())
}

/// `PLAT-192` -> `Some("PLAT")` when `PLAT` is a configured project
fn configured_project<'a>(issue_key: &'a str, config: &Config) -> Option<&'a str> {
    if !issue_key_regex().is_match(issue_key) {
        return None;
    }
    let (project, _) = issue_key.split_once('-')?;
    config.jira.allows(project).then_some(project)
}

/// Detect an input that is nothing but an issue key
pub fn detect_key(input: &str, config: &Config) -> Option<Detection> {
    let issue_key = input.trim();
    let project = configured_project(issue_key, config)?;
    Some(Detection::new(
        input,
        95,
        Payload::JiraKey {
            issue_key: issue_key.to_string(),
            project: project.to_string(),
        },
    ))
}

/// Detect an issue key followed by a blank line and a description
///
/// ```text
/// PLAT-192
///
/// blinc - add webhook proxy logs
/// ```
///
/// Every non-empty line after the blank separator is trimmed and joined with
/// a single space.
pub fn detect_key_with_description(input: &str, config: &Config) -> Option<Detection> {
    let lines: Vec<&str> = input.trim().split('\n').map(str::trim).collect();
    let [first, separator, rest @ ..] = lines.as_slice() else {
        return None;
    };
    if !separator.is_empty() {
        return None;
    }
    let project = configured_project(first, config)?;

    let description = rest
        .iter()
        .filter(|line| !line.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if description.is_empty() {
        return None;
    }

    Some(Detection::new(
        input,
        98,
        Payload::JiraKeyWithDescription {
            issue_key: first.to_string(),
            project: project.to_string(),
            description,
        },
    ))
}
