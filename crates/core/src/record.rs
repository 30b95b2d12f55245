//! Detection records passed from detectors to renderers
//!
//! A [`Detection`] is created once by a detector and never mutated. Instead of
//! an open attribute bag, each kind of content carries exactly the fields it
//! needs in a [`Payload`] variant.

use serde::Serialize;

/// Tag for the kind of content a detector recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Url,
    #[serde(rename = "github_url")]
    GitHubUrl,
    #[serde(rename = "github_ui_paste")]
    GitHubUiPaste,
    JiraUrl,
    JiraComment,
    NotionUrl,
    JiraKey,
    JiraKeyWithDescription,
    #[serde(rename = "phone_7_digit")]
    Phone7Digit,
    #[serde(rename = "phone_10_digit")]
    Phone10Digit,
    #[serde(rename = "phone_11_digit")]
    Phone11Digit,
    AppDeepLink,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Url => "url",
            ContentType::GitHubUrl => "github_url",
            ContentType::GitHubUiPaste => "github_ui_paste",
            ContentType::JiraUrl => "jira_url",
            ContentType::JiraComment => "jira_comment",
            ContentType::NotionUrl => "notion_url",
            ContentType::JiraKey => "jira_key",
            ContentType::JiraKeyWithDescription => "jira_key_with_description",
            ContentType::Phone7Digit => "phone_7_digit",
            ContentType::Phone10Digit => "phone_10_digit",
            ContentType::Phone11Digit => "phone_11_digit",
            ContentType::AppDeepLink => "app_deep_link",
        }
    }
}

/// The structured result of one detector recognizing its shape in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// The exact string the detector examined
    pub original_input: String,
    /// 0-100
    pub confidence: u8,
    pub payload: Payload,
}

/// Kind-specific fields of a detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    /// Any other http(s) URL. `domain` is the host as written (case preserved).
    Url {
        domain: String,
    },
    #[serde(rename = "github_url")]
    GitHubUrl {
        org: String,
        repo: String,
        reference: Option<GitHubReference>,
    },
    #[serde(rename = "github_ui_paste")]
    GitHubUiPaste(GitHubIssue),
    JiraUrl {
        issue_key: String,
    },
    JiraComment {
        issue_key: String,
        comment_id: String,
    },
    /// `title` is absent when the page slug carries no UUID suffix
    NotionUrl {
        title: Option<String>,
    },
    JiraKey {
        issue_key: String,
        project: String,
    },
    JiraKeyWithDescription {
        issue_key: String,
        project: String,
        description: String,
    },
    Phone(PhoneNumber),
    AppDeepLink {
        is_ai_chat: bool,
        is_note: bool,
    },
}

/// What a GitHub URL points at below `org/repo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GitHubRefKind {
    Pull,
    Issues,
    Commit,
}

impl GitHubRefKind {
    /// Parse the path segment that follows `org/repo`
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "pull" => Some(GitHubRefKind::Pull),
            "issues" => Some(GitHubRefKind::Issues),
            "commit" => Some(GitHubRefKind::Commit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GitHubRefKind::Pull => "pull",
            GitHubRefKind::Issues => "issues",
            GitHubRefKind::Commit => "commit",
        }
    }
}

/// `pull/123`, `issues/42` or `commit/<sha>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitHubReference {
    pub kind: GitHubRefKind,
    pub id: String,
}

/// An issue recovered from text pasted out of the GitHub web UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitHubIssue {
    pub org: String,
    pub repo: String,
    pub title: String,
    pub number: String,
    /// Always [`GitHubRefKind::Issues`]; pastes do not tell PRs apart.
    #[serde(rename = "type")]
    pub kind: GitHubRefKind,
}

/// Phone number lengths accepted by the phone detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneLength {
    Seven,
    Ten,
    Eleven,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    pub length: PhoneLength,
    /// The matched text as given
    pub raw_number: String,
    /// Dash-grouped display, e.g. `890-123-4567`
    pub formatted_display: String,
    /// Target for the `tel:` link, e.g. `8901234567` or `+18901234567`
    pub tel_url: String,
    pub is_exact_match: bool,
}

impl Detection {
    pub fn new(original_input: impl Into<String>, confidence: u8, payload: Payload) -> Self {
        Self {
            original_input: original_input.into(),
            confidence,
            payload,
        }
    }

    /// The content tag for this record's payload
    pub fn content_type(&self) -> ContentType {
        match &self.payload {
            Payload::Url { .. } => ContentType::Url,
            Payload::GitHubUrl { .. } => ContentType::GitHubUrl,
            Payload::GitHubUiPaste(_) => ContentType::GitHubUiPaste,
            Payload::JiraUrl { .. } => ContentType::JiraUrl,
            Payload::JiraComment { .. } => ContentType::JiraComment,
            Payload::NotionUrl { .. } => ContentType::NotionUrl,
            Payload::JiraKey { .. } => ContentType::JiraKey,
            Payload::JiraKeyWithDescription { .. } => ContentType::JiraKeyWithDescription,
            Payload::Phone(phone) => match phone.length {
                PhoneLength::Seven => ContentType::Phone7Digit,
                PhoneLength::Ten => ContentType::Phone10Digit,
                PhoneLength::Eleven => ContentType::Phone11Digit,
            },
            Payload::AppDeepLink { .. } => ContentType::AppDeepLink,
        }
    }

    /// Flat `(name, value)` view of the payload, for reports
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match &self.payload {
            Payload::Url { domain } => vec![("domain", domain.clone())],
            Payload::GitHubUrl {
                org,
                repo,
                reference,
            } => {
                let mut attributes = vec![("org", org.clone()), ("repo", repo.clone())];
                if let Some(reference) = reference {
                    attributes.push(("type", reference.kind.as_str().to_string()));
                    attributes.push(("number", reference.id.clone()));
                }
                attributes
            }
            Payload::GitHubUiPaste(issue) => vec![
                ("org", issue.org.clone()),
                ("repo", issue.repo.clone()),
                ("title", issue.title.clone()),
                ("number", issue.number.clone()),
                ("type", issue.kind.as_str().to_string()),
            ],
            Payload::JiraUrl { issue_key } => vec![("issue_key", issue_key.clone())],
            Payload::JiraComment {
                issue_key,
                comment_id,
            } => vec![
                ("issue_key", issue_key.clone()),
                ("comment_id", comment_id.clone()),
            ],
            Payload::NotionUrl { title } => {
                title.iter().map(|title| ("title", title.clone())).collect()
            }
            Payload::JiraKey { issue_key, project } => vec![
                ("issue_key", issue_key.clone()),
                ("project", project.clone()),
            ],
            Payload::JiraKeyWithDescription {
                issue_key,
                project,
                description,
            } => vec![
                ("issue_key", issue_key.clone()),
                ("project", project.clone()),
                ("description", description.clone()),
            ],
            Payload::Phone(phone) => vec![
                ("raw_number", phone.raw_number.clone()),
                ("formatted_display", phone.formatted_display.clone()),
                ("tel_url", phone.tel_url.clone()),
                ("is_exact_match", phone.is_exact_match.to_string()),
            ],
            Payload::AppDeepLink {
                is_ai_chat,
                is_note,
            } => vec![
                ("isAIChat", is_ai_chat.to_string()),
                ("isNote", is_note.to_string()),
            ],
        }
    }
}
