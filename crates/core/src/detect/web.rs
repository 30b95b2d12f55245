//! Web URL detection
//!
//! Recognizes absolute `http://` / `https://` URLs and classifies them as
//! GitHub, JIRA, JIRA comment, Notion or generic links.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::config::Config;
use crate::record::{Detection, GitHubRefKind, GitHubReference, Payload};

const GITHUB_HOST: &str = "github.com";
const NOTION_HOST: &str = "notion.so";
const COMMENT_PARAM: &str = "focusedCommentId";

static JIRA_BROWSE_REGEX: OnceLock<Regex> = OnceLock::new();
static NOTION_SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

fn jira_browse_regex() -> &'static Regex {
    JIRA_BROWSE_REGEX.get_or_init(|| Regex::new(r"/browse/([A-Z]+-[0-9]+)").unwrap())
}

fn notion_slug_regex() -> &'static Regex {
    NOTION_SLUG_REGEX.get_or_init(|| Regex::new(r"^(.+)-[a-f0-9]{32}").unwrap())
}

/// Detect a web URL
///
/// Returns `None` unless the whole input is a syntactically valid URL with an
/// `http` or `https` scheme.
pub fn detect(input: &str, config: &Config) -> Option<Detection> {
    if !is_web_url(input) {
        return None;
    }
    let url = Url::parse(input).ok()?;
    let host = raw_host(input);
    let path = decoded_path(&url);

    if host == GITHUB_HOST {
        if let Some(payload) = github_payload(&path) {
            return Some(Detection::new(input, 90, payload));
        }
    }

    if config.jira.is_jira_host(&url) {
        if let Some(detection) = jira_detection(input, &url, &path) {
            return Some(detection);
        }
    }

    if url.host_str().is_some_and(|h| h.contains(NOTION_HOST)) {
        let title = notion_title(&path);
        return Some(Detection::new(input, 85, Payload::NotionUrl { title }));
    }

    Some(Detection::new(
        input,
        50,
        Payload::Url {
            domain: host.to_string(),
        },
    ))
}

/// Scheme prefix check plus a parse; control characters (newlines included)
/// are rejected outright since the parser would silently drop them.
fn is_web_url(input: &str) -> bool {
    (input.starts_with("http://") || input.starts_with("https://"))
        && !input.chars().any(char::is_control)
        && Url::parse(input).is_ok()
}

/// The authority's host as written in `input`, port included, case preserved
///
/// Userinfo is dropped. Returns an empty string when `input` has no `://`.
pub fn raw_host(input: &str) -> &str {
    let Some((_, rest)) = input.split_once("://") else {
        return "";
    };
    let authority = rest.find(['/', '?', '#']).map_or(rest, |end| &rest[..end]);
    authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host)
}

fn decoded_path(url: &Url) -> String {
    urlencoding::decode(url.path())
        .map(Cow::into_owned)
        .unwrap_or_else(|_| url.path().to_string())
}

fn path_segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

/// `/org/repo[/pull|issues|commit/id]`
fn github_payload(path: &str) -> Option<Payload> {
    let segments = path_segments(path);
    let (org, repo) = match segments.as_slice() {
        [org, repo, ..] if !org.is_empty() && !repo.is_empty() => (*org, *repo),
        _ => return None,
    };

    let reference = match segments.as_slice() {
        [_, _, kind, id, ..] if !id.is_empty() => {
            GitHubRefKind::from_segment(kind).map(|kind| GitHubReference {
                kind,
                id: id.to_string(),
            })
        }
        _ => None,
    };

    Some(Payload::GitHubUrl {
        org: org.to_string(),
        repo: repo.to_string(),
        reference,
    })
}

fn jira_detection(input: &str, url: &Url, path: &str) -> Option<Detection> {
    let issue_key = jira_browse_regex()
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())?;

    let comment_id = url
        .query_pairs()
        .find(|(name, _)| name == COMMENT_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty());

    Some(match comment_id {
        Some(comment_id) => Detection::new(
            input,
            95,
            Payload::JiraComment {
                issue_key,
                comment_id,
            },
        ),
        None => Detection::new(input, 90, Payload::JiraUrl { issue_key }),
    })
}

/// Page title from the last path segment, `Page-Title-<32 hex>` -> `Page Title`
fn notion_title(path: &str) -> Option<String> {
    let slug = path_segments(path).into_iter().last()?;
    notion_slug_regex()
        .captures(slug)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace('-', " "))
}
