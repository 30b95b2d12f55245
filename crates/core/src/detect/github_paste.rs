//! Text pasted out of the GitHub web UI
//!
//! Two shapes are recognized:
//!
//! - a short issue title line, optionally prefixed by the author's handle:
//!   `courtneylw adds blinc ddagent file #15407`. The configured default
//!   org/repo is used.
//! - a multi-line copy of a GitHub page where the org and repo names each sit
//!   on their own line somewhere above or below the `Title #123` line.
//!
//! Telling a handle apart from the first word of a title relies on a small
//! list of common English words. It is a heuristic and will misfire on titles
//! starting with words outside that list.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::Config;
use crate::record::{Detection, GitHubIssue, GitHubRefKind, Payload};

/// Strings that only show up when a whole GitHub page was copied
const CHROME_INDICATORS: [&str; 9] = [
    "Type / to search",
    "Pull requests",
    "Discussions",
    "Actions",
    "Projects",
    "Wiki",
    "Security",
    "Insights",
    "Settings",
];

/// Words that commonly start an issue title and are therefore never handles
const COMMON_WORDS: [&str; 18] = [
    "adds",
    "fixes",
    "updates",
    "removes",
    "creates",
    "deletes",
    "implements",
    "enhances",
    "refactors",
    "only",
    "some",
    "the",
    "and",
    "with",
    "for",
    "from",
    "this",
    "that",
];

const MAX_NAME_LEN: usize = 39;
const MAX_REPO_LEN: usize = 100;

static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
static USERNAME_TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
static GITHUB_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
static REPO_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn title_regex() -> &'static Regex {
    TITLE_REGEX.get_or_init(|| Regex::new(r"^(.+)\s+#([0-9]+)\s*$").unwrap())
}

fn username_title_regex() -> &'static Regex {
    USERNAME_TITLE_REGEX
        .get_or_init(|| Regex::new(r"^([a-zA-Z0-9_-]+)\s+(.+)\s+#([0-9]+)\s*$").unwrap())
}

fn github_name_regex() -> &'static Regex {
    GITHUB_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?$").unwrap())
}

fn username_regex() -> &'static Regex {
    USERNAME_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9_-]*[a-zA-Z0-9])?$").unwrap())
}

fn repo_name_regex() -> &'static Regex {
    REPO_NAME_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9._-]+$").unwrap())
}

/// Detect a pasted GitHub issue title
pub fn detect(input: &str, config: &Config) -> Option<Detection> {
    let lines = trimmed_lines(input);

    if is_simple_issue_title(&lines) {
        return detect_simple(input, &lines, config);
    }
    if lines.len() < 3 || !has_ui_candidates(&lines) {
        return None;
    }
    detect_multi_line(input, &lines)
}

/// Lines of the trimmed input, each trimmed
fn trimmed_lines(input: &str) -> Vec<&str> {
    input.trim().split('\n').map(str::trim).collect()
}

fn detect_simple(input: &str, lines: &[&str], config: &Config) -> Option<Detection> {
    let (title, number) = lines
        .iter()
        .filter(|line| !line.is_empty())
        .find_map(|line| {
            extract_username_and_issue(line).or_else(|| extract_issue_title_and_number(line))
        })?;

    let (org, repo) = config.github.default_repository()?;
    Some(issue_detection(input, 95, org, repo, title, number))
}

fn detect_multi_line(input: &str, lines: &[&str]) -> Option<Detection> {
    let (title_index, (title, number)) = lines
        .iter()
        .enumerate()
        .find_map(|(i, line)| extract_issue_title_and_number(line).map(|found| (i, found)))?;

    let mut candidates = lines
        .iter()
        .enumerate()
        .filter(|(i, line)| *i != title_index && !line.is_empty())
        .map(|(_, line)| *line);

    let org = candidates.find(|line| is_valid_github_name(line))?;
    let repo = candidates.find(|line| is_valid_repo_name(line) && *line != org)?;

    Some(issue_detection(input, 90, org, repo, title, number))
}

fn issue_detection(
    input: &str,
    confidence: u8,
    org: &str,
    repo: &str,
    title: String,
    number: String,
) -> Detection {
    Detection::new(
        input,
        confidence,
        Payload::GitHubUiPaste(GitHubIssue {
            org: org.to_string(),
            repo: repo.to_string(),
            title,
            number,
            kind: GitHubRefKind::Issues,
        }),
    )
}

/// Whether the lines contain an org-like line, a repo-like line and a title line
fn has_ui_candidates(lines: &[&str]) -> bool {
    let present = |predicate: fn(&str) -> bool| {
        lines.iter().any(|line| !line.is_empty() && predicate(line))
    };
    present(is_valid_github_name)
        && present(is_valid_repo_name)
        && present(has_issue_title_with_number)
}

/// Short input (at most three lines) with exactly one issue title line and no
/// sign of a full page copy
fn is_simple_issue_title(lines: &[&str]) -> bool {
    match lines {
        [] => false,
        [line] => has_github_username_prefix(line) || has_issue_title_with_number(line),
        _ if lines.len() > 3 => false,
        _ => {
            let mut issue_lines = 0;
            let mut name_lines = 0;
            for line in lines.iter().filter(|line| !line.is_empty()) {
                if CHROME_INDICATORS.iter().any(|chrome| line.contains(chrome)) {
                    return false;
                }
                if has_github_username_prefix(line) || has_issue_title_with_number(line) {
                    issue_lines += 1;
                } else if is_valid_github_name(line) || is_valid_repo_name(line) {
                    name_lines += 1;
                }
            }
            name_lines < 2 && issue_lines == 1
        }
    }
}

/// `handle <title> #<number>` where `handle` passes [`is_github_username`]
pub fn has_github_username_prefix(line: &str) -> bool {
    let line = line.trim();
    if !username_title_regex().is_match(line) {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    words.len() >= 3 && is_github_username(words[0])
}

/// Split `handle <title> #<number>` into `(title, number)`
pub fn extract_username_and_issue(line: &str) -> Option<(String, String)> {
    let caps = username_title_regex().captures(line.trim())?;
    if !is_github_username(&caps[1]) {
        return None;
    }
    Some((caps[2].trim().to_string(), caps[3].to_string()))
}

/// Whether `line` ends in ` #<number>` after some title text
pub fn has_issue_title_with_number(line: &str) -> bool {
    title_regex().is_match(line.trim())
}

/// Split `<title> #<number>` into `(title, number)`
pub fn extract_issue_title_and_number(line: &str) -> Option<(String, String)> {
    let caps = title_regex().captures(line.trim())?;
    Some((caps[1].trim().to_string(), caps[2].to_string()))
}

/// Plausible GitHub org or user name: alphanumerics and inner hyphens, 1-39 chars
pub fn is_valid_github_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_NAME_LEN && github_name_regex().is_match(name)
}

/// Plausible repository name: alphanumerics, `.`, `_` and `-`, 1-100 chars
pub fn is_valid_repo_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_REPO_LEN && repo_name_regex().is_match(name)
}

/// Whether a leading word looks like a handle rather than the start of a title
pub fn is_github_username(word: &str) -> bool {
    !word.is_empty()
        && word.len() <= MAX_NAME_LEN
        && username_regex().is_match(word)
        && !COMMON_WORDS
            .iter()
            .any(|common| common.eq_ignore_ascii_case(word))
}
