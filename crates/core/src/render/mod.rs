//! Markdown renderers
//!
//! Every renderer scores every detection through [`Renderer::vote`]; the
//! arbitration step in [`crate::arbitrate`] picks the best pair and only that
//! renderer's [`Renderer::render`] runs. A renderer handed a detection it does
//! not know returns the original input unchanged.

use serde::Serialize;
use thiserror::Error;

use crate::arbitrate;
use crate::config::Config;
use crate::record::Detection;

pub mod deep_link;
pub mod jira;
pub mod phone;
pub mod web;

/// Error type for rendering
///
/// Only raised for detections that are internally inconsistent; missing
/// optional fields fall back to passthrough or generic output instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Phone record is missing its {0}")]
    IncompletePhoneRecord(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Renderer {
    UrlFamily,
    JiraWithDescription,
    JiraKey,
    Phone,
    DeepLink,
    Passthrough,
}

impl Renderer {
    /// Every renderer, in registration order (the arbitration tie-break order)
    pub const ALL: [Renderer; 6] = [
        Renderer::UrlFamily,
        Renderer::JiraWithDescription,
        Renderer::JiraKey,
        Renderer::Phone,
        Renderer::DeepLink,
        Renderer::Passthrough,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Renderer::UrlFamily => "url_family",
            Renderer::JiraWithDescription => "jira_with_description",
            Renderer::JiraKey => "jira_key",
            Renderer::Phone => "phone",
            Renderer::DeepLink => "deep_link",
            Renderer::Passthrough => "passthrough",
        }
    }

    /// How well this renderer suits `detection`; 0 means not at all
    pub fn vote(&self, detection: &Detection) -> u8 {
        arbitrate::vote(*self, detection)
    }

    /// Render `detection` as Markdown
    pub fn render(&self, detection: &Detection, config: &Config) -> Result<String, RenderError> {
        match self {
            Renderer::UrlFamily => Ok(web::render(detection, config)),
            Renderer::JiraWithDescription => Ok(jira::render_with_description(detection, config)),
            Renderer::JiraKey => Ok(jira::render_key(detection, config)),
            Renderer::Phone => phone::render(detection),
            Renderer::DeepLink => Ok(deep_link::render(detection)),
            Renderer::Passthrough => Ok(detection.original_input.clone()),
        }
    }
}

/// `[text](target)`
pub(crate) fn markdown_link(text: &str, target: &str) -> String {
    format!("[{text}]({target})")
}
