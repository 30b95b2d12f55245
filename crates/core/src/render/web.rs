//! URL-family rendering: GitHub, JIRA, Notion and generic links

use crate::config::Config;
use crate::detect::web::raw_host;
use crate::record::{Detection, GitHubIssue, GitHubRefKind, GitHubReference, Payload};

use super::markdown_link;

/// Commit hashes are shortened to this many characters in link text
const SHORT_SHA_LEN: usize = 7;

pub fn render(detection: &Detection, config: &Config) -> String {
    let original = detection.original_input.as_str();
    match &detection.payload {
        Payload::GitHubUrl {
            org,
            repo,
            reference,
        } => github_url(original, org, repo, reference.as_ref(), config),
        Payload::GitHubUiPaste(issue) => github_issue(original, issue, config),
        Payload::JiraUrl { issue_key } if !issue_key.is_empty() => {
            markdown_link(issue_key, original)
        }
        Payload::JiraComment { issue_key, .. } if !issue_key.is_empty() => {
            markdown_link(&format!("{issue_key} comment"), original)
        }
        Payload::NotionUrl { title: Some(title) } if !title.is_empty() => {
            markdown_link(title, original)
        }
        Payload::Url { domain } => markdown_link(&config.url.display_name(domain), original),
        Payload::JiraUrl { .. } | Payload::JiraComment { .. } | Payload::NotionUrl { .. } => {
            generic(original, config)
        }
        _ => original.to_string(),
    }
}

/// Link labelled with the (mapped) host of `original`
fn generic(original: &str, config: &Config) -> String {
    let host = raw_host(original);
    if host.is_empty() {
        return original.to_string();
    }
    markdown_link(&config.url.display_name(host), original)
}

/// `[org/repo#id](original)`, with the label taken from the repo mappings
fn github_url(
    original: &str,
    org: &str,
    repo: &str,
    reference: Option<&GitHubReference>,
    config: &Config,
) -> String {
    if org.is_empty() || repo.is_empty() {
        return generic(original, config);
    }

    let mut label = config.github.display_name(org, repo);
    if let Some(reference) = reference.filter(|r| !r.id.is_empty()) {
        let id: String = match reference.kind {
            GitHubRefKind::Commit => reference.id.chars().take(SHORT_SHA_LEN).collect(),
            _ => reference.id.clone(),
        };
        label = format!("{label}#{id}");
    }
    markdown_link(&label, original)
}

/// The canonical issue URL is rebuilt from the parts; the pasted text is not a link.
fn github_issue(original: &str, issue: &GitHubIssue, config: &Config) -> String {
    let GitHubIssue {
        org,
        repo,
        title,
        number,
        kind,
    } = issue;
    if org.is_empty() || repo.is_empty() || title.is_empty() || number.is_empty() {
        return original.to_string();
    }

    let url = format!("https://github.com/{org}/{repo}/{}/{number}", kind.as_str());
    let label = format!(
        "{}#{number}: {title}",
        config.github.display_name(org, repo)
    );
    markdown_link(&label, &url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_yaml_str(Config::default_yaml()).unwrap()
    }

    fn github(
        input: &str,
        org: &str,
        repo: &str,
        reference: Option<(GitHubRefKind, &str)>,
    ) -> Detection {
        Detection::new(
            input,
            90,
            Payload::GitHubUrl {
                org: org.to_string(),
                repo: repo.to_string(),
                reference: reference.map(|(kind, id)| GitHubReference {
                    kind,
                    id: id.to_string(),
                }),
            },
        )
    }

    // ============================================================================
    // GitHub URL tests
    // ============================================================================

    #[test]
    fn test_github_pull_request_mapped() {
        let input = "https://github.com/CompanyCam/Company-Cam-API/pull/15217";
        let detection = github(
            input,
            "CompanyCam",
            "Company-Cam-API",
            Some((GitHubRefKind::Pull, "15217")),
        );
        assert_eq!(
            render(&detection, &config()),
            format!("[CompanyCam/API#15217]({input})")
        );
    }

    #[test]
    fn test_github_pull_request_unmapped() {
        let input = "https://github.com/CompanyCam/Company-Cam-API/pull/15217";
        let detection = github(
            input,
            "CompanyCam",
            "Company-Cam-API",
            Some((GitHubRefKind::Pull, "15217")),
        );
        assert_eq!(
            render(&detection, &Config::default()),
            format!("[CompanyCam/Company-Cam-API#15217]({input})")
        );
    }

    #[test]
    fn test_github_repository() {
        let input = "https://github.com/pedropark99/zig-book";
        let detection = github(input, "pedropark99", "zig-book", None);
        assert_eq!(
            render(&detection, &config()),
            format!("[pedropark99/zig-book]({input})")
        );
    }

    #[test]
    fn test_github_commit_is_shortened_in_label_only() {
        let input = "https://github.com/org/repo/commit/0123456789abcdef";
        let detection = github(
            input,
            "org",
            "repo",
            Some((GitHubRefKind::Commit, "0123456789abcdef")),
        );
        assert_eq!(
            render(&detection, &config()),
            format!("[org/repo#0123456]({input})")
        );
    }

    #[test]
    fn test_github_short_commit_kept() {
        let input = "https://github.com/org/repo/commit/abc123";
        let detection = github(
            input,
            "org",
            "repo",
            Some((GitHubRefKind::Commit, "abc123")),
        );
        assert_eq!(
            render(&detection, &config()),
            format!("[org/repo#abc123]({input})")
        );
    }

    #[test]
    fn test_github_commit_shortened_by_characters() {
        let input = "https://github.com/org/repo/commit/%C3%A9";
        let detection = github(
            input,
            "org",
            "repo",
            Some((GitHubRefKind::Commit, "ééééééééé")),
        );
        assert_eq!(
            render(&detection, &config()),
            format!("[org/repo#ééééééé]({input})")
        );
    }

    #[test]
    fn test_github_issue_number_not_shortened() {
        let input = "https://github.com/org/repo/issues/123456789";
        let detection = github(
            input,
            "org",
            "repo",
            Some((GitHubRefKind::Issues, "123456789")),
        );
        assert_eq!(
            render(&detection, &config()),
            format!("[org/repo#123456789]({input})")
        );
    }

    #[test]
    fn test_github_missing_org_is_generic() {
        let input = "https://github.com/x";
        let detection = github(input, "", "", None);
        assert_eq!(
            render(&detection, &config()),
            format!("[github.com]({input})")
        );
    }

    // ============================================================================
    // GitHub UI paste tests
    // ============================================================================

    fn pasted(org: &str, repo: &str, title: &str, number: &str) -> Detection {
        Detection::new(
            "whatever was pasted",
            95,
            Payload::GitHubUiPaste(GitHubIssue {
                org: org.to_string(),
                repo: repo.to_string(),
                title: title.to_string(),
                number: number.to_string(),
                kind: GitHubRefKind::Issues,
            }),
        )
    }

    #[test]
    fn test_github_issue_rebuilds_url() {
        let detection = pasted("MyOrg", "my-repo", "Fix the bug", "123");
        assert_eq!(
            render(&detection, &config()),
            "[MyOrg/my-repo#123: Fix the bug](https://github.com/MyOrg/my-repo/issues/123)"
        );
    }

    #[test]
    fn test_github_issue_uses_mapping_in_label_only() {
        let detection = pasted(
            "CompanyCam",
            "Company-Cam-API",
            "adds blinc ddagent file",
            "15407",
        );
        assert_eq!(
            render(&detection, &config()),
            "[CompanyCam/API#15407: adds blinc ddagent file](https://github.com/CompanyCam/Company-Cam-API/issues/15407)"
        );
    }

    #[test]
    fn test_github_issue_missing_field_is_passthrough() {
        let detection = pasted("MyOrg", "my-repo", "", "123");
        assert_eq!(render(&detection, &config()), "whatever was pasted");
    }

    // ============================================================================
    // JIRA and Notion tests
    // ============================================================================

    #[test]
    fn test_jira_url() {
        let input = "https://companycam.atlassian.net/browse/PLAT-192";
        let detection = Detection::new(
            input,
            90,
            Payload::JiraUrl {
                issue_key: "PLAT-192".to_string(),
            },
        );
        assert_eq!(
            render(&detection, &config()),
            format!("[PLAT-192]({input})")
        );
    }

    #[test]
    fn test_jira_comment() {
        let input = "https://companycam.atlassian.net/browse/PLAT-192?focusedCommentId=20266";
        let detection = Detection::new(
            input,
            95,
            Payload::JiraComment {
                issue_key: "PLAT-192".to_string(),
                comment_id: "20266".to_string(),
            },
        );
        assert_eq!(
            render(&detection, &config()),
            format!("[PLAT-192 comment]({input})")
        );
    }

    #[test]
    fn test_jira_empty_key_is_generic() {
        let input = "https://companycam.atlassian.net/browse/";
        let detection = Detection::new(
            input,
            90,
            Payload::JiraUrl {
                issue_key: String::new(),
            },
        );
        assert_eq!(
            render(&detection, &config()),
            format!("[companycam.atlassian.net]({input})")
        );
    }

    #[test]
    fn test_notion_title() {
        let input = "https://www.notion.so/ws/VS-Code-Setup-for-Standard-rb-RubyLSP-654a6b070ae74ac3ad400c6d571507c0";
        let detection = Detection::new(
            input,
            85,
            Payload::NotionUrl {
                title: Some("VS Code Setup for Standard rb RubyLSP".to_string()),
            },
        );
        assert_eq!(
            render(&detection, &config()),
            format!("[VS Code Setup for Standard rb RubyLSP]({input})")
        );
    }

    #[test]
    fn test_notion_without_title_is_generic() {
        let input = "https://www.notion.so/ws/page";
        let detection = Detection::new(input, 85, Payload::NotionUrl { title: None });
        assert_eq!(
            render(&detection, &config()),
            format!("[notion.so]({input})")
        );
    }

    // ============================================================================
    // Generic URL tests
    // ============================================================================

    fn generic_url(input: &str, domain: &str) -> Detection {
        Detection::new(
            input,
            50,
            Payload::Url {
                domain: domain.to_string(),
            },
        )
    }

    #[test]
    fn test_generic_strips_prefixes() {
        let input = "http://ww3.domain.tld/path/to/document?query=value#anchor";
        assert_eq!(
            render(&generic_url(input, "ww3.domain.tld"), &config()),
            format!("[domain.tld]({input})")
        );
    }

    #[test]
    fn test_generic_mapped_domain() {
        let input = "https://companycam.slack.com/archives/C123";
        assert_eq!(
            render(&generic_url(input, "companycam.slack.com"), &config()),
            format!("[slack]({input})")
        );

        let input = "https://www.youtube.com/watch?v=abc";
        assert_eq!(
            render(&generic_url(input, "www.youtube.com"), &config()),
            format!("[YouTube]({input})")
        );
    }
}
