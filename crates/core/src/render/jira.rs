//! Links to JIRA issues built from bare keys

use crate::config::Config;
use crate::record::{Detection, Payload};

use super::markdown_link;

/// `[KEY](domain/browse/KEY)`
pub fn render_key(detection: &Detection, config: &Config) -> String {
    match &detection.payload {
        Payload::JiraKey { issue_key, .. } if !issue_key.is_empty() => {
            markdown_link(issue_key, &config.jira.browse_url(issue_key))
        }
        _ => detection.original_input.clone(),
    }
}

/// `[KEY: description](domain/browse/KEY)`
pub fn render_with_description(detection: &Detection, config: &Config) -> String {
    match &detection.payload {
        Payload::JiraKeyWithDescription {
            issue_key,
            description,
            ..
        } if !issue_key.is_empty() && !description.is_empty() => markdown_link(
            &format!("{issue_key}: {description}"),
            &config.jira.browse_url(issue_key),
        ),
        _ => detection.original_input.clone(),
    }
}
