//! Pattern detectors
//!
//! Each detector inspects the raw input on its own and either recognizes its
//! shape, producing a [`Detection`], or returns `None`. Detectors never see
//! each other's output. [`Detector::ALL`] fixes the registration order, which
//! is also the order detections reach the arbitration step.

use serde::Serialize;

use crate::config::Config;
use crate::record::Detection;

pub mod deep_link;
pub mod github_paste;
pub mod jira;
pub mod phone;
pub mod web;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Detector {
    Url,
    #[serde(rename = "github_ui_paste")]
    GitHubUiPaste,
    JiraKey,
    JiraKeyWithDescription,
    Phone,
    AppDeepLink,
}

impl Detector {
    /// Every detector, in registration order
    pub const ALL: [Detector; 6] = [
        Detector::Url,
        Detector::GitHubUiPaste,
        Detector::JiraKey,
        Detector::JiraKeyWithDescription,
        Detector::Phone,
        Detector::AppDeepLink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Detector::Url => "url",
            Detector::GitHubUiPaste => "github_ui_paste",
            Detector::JiraKey => "jira_key",
            Detector::JiraKeyWithDescription => "jira_key_with_description",
            Detector::Phone => "phone",
            Detector::AppDeepLink => "app_deep_link",
        }
    }

    /// Run this detector against `input`
    pub fn detect(&self, input: &str, config: &Config) -> Option<Detection> {
        match self {
            Detector::Url => web::detect(input, config),
            Detector::GitHubUiPaste => github_paste::detect(input, config),
            Detector::JiraKey => jira::detect_key(input, config),
            Detector::JiraKeyWithDescription => jira::detect_key_with_description(input, config),
            Detector::Phone => phone::detect(input),
            Detector::AppDeepLink => deep_link::detect(input),
        }
    }
}

/// Run every detector against the same input, keeping registration order
///
/// Each detection is paired with the detector that produced it.
pub fn detect_all(input: &str, config: &Config) -> Vec<(Detector, Detection)> {
    Detector::ALL
        .iter()
        .filter_map(|detector| {
            detector
                .detect(input, config)
                .map(|detection| (*detector, detection))
        })
        .collect()
}
