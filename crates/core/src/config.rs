//! Configuration values shared by every detector and renderer
//!
//! The configuration is decoded once per run from YAML and never mutated
//! afterwards. Map-valued settings use `BTreeMap` so that lookups which stop
//! at the first case-insensitive match always see keys in the same order.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use url::Url;

/// Document written to disk the first time the CLI runs without a config file.
const DEFAULT_CONFIG_YAML: &str = r#"github:
  default_org: "CompanyCam"
  default_repo: "Company-Cam-API"
  mappings:
    "CompanyCam/Company-Cam-API": "CompanyCam/API"

jira:
  domain: "https://companycam.atlassian.net"
  projects:
    - "PLAT"
    - "SPEED"

url:
  domain_mappings:
    "companycam_slack_com": "slack"
    "youtube_com": "YouTube"
"#;

/// Error type for configuration decoding
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "null_as_default")]
    pub github: GitHubConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jira: JiraConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: UrlConfig,
}

/// GitHub defaults and display mappings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_org: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_repo: String,
    /// `org/repo` (matched case-insensitively) to preferred display text
    #[serde(default, deserialize_with = "null_as_default")]
    pub mappings: BTreeMap<String, String>,
}

/// JIRA instance and the project keys it recognizes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<String>,
}

/// Display names for generic URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Normalized domain (dots replaced by underscores) to display text
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain_mappings: BTreeMap<String, String>,
}

/// Treat an explicit YAML `null` (e.g. `github:` with nothing under it) like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    /// Decode a configuration from a YAML document
    ///
    /// An empty document yields the all-empty configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Option<Config> = serde_yaml::from_str(yaml)?;
        Ok(config.unwrap_or_default())
    }

    /// The YAML document used to bootstrap a missing config file
    pub fn default_yaml() -> &'static str {
        DEFAULT_CONFIG_YAML
    }
}

impl GitHubConfig {
    /// Display text for a repository, honouring `mappings`
    ///
    /// Returns the mapped value of the first key equal to `org/repo` ignoring
    /// ASCII case, or `org/repo` itself.
    pub fn display_name(&self, org: &str, repo: &str) -> String {
        let org_repo = format!("{org}/{repo}");
        self.mappings
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(&org_repo))
            .map(|(_, mapped)| mapped.clone())
            .unwrap_or(org_repo)
    }

    /// The configured default `(org, repo)`, if both are set
    pub fn default_repository(&self) -> Option<(&str, &str)> {
        if self.default_org.is_empty() || self.default_repo.is_empty() {
            return None;
        }
        Some((&self.default_org, &self.default_repo))
    }
}

impl JiraConfig {
    /// Whether `project` is one of the configured project keys (exact match)
    pub fn allows(&self, project: &str) -> bool {
        self.projects.iter().any(|p| p == project)
    }

    /// Browse URL for an issue key, e.g. `https://x.atlassian.net/browse/PLAT-1`
    pub fn browse_url(&self, issue_key: &str) -> String {
        format!("{}/browse/{}", self.domain.trim_end_matches('/'), issue_key)
    }

    /// Whether `url` points at the configured JIRA host
    ///
    /// Always false when no domain is configured or the domain has no host.
    pub fn is_jira_host(&self, url: &Url) -> bool {
        if self.domain.is_empty() {
            return false;
        }
        let Ok(domain) = Url::parse(&self.domain) else {
            return false;
        };
        match (domain.host_str(), url.host_str()) {
            (Some(expected), Some(actual)) => expected == actual && domain.port() == url.port(),
            _ => false,
        }
    }
}

impl UrlConfig {
    /// Link text for a host
    ///
    /// Strips a leading `www.` then `ww3.`, then looks the result up in
    /// `domain_mappings` with dots replaced by underscores, ignoring ASCII
    /// case on both sides. Falls back to the stripped host.
    pub fn display_name(&self, host: &str) -> String {
        let domain = host.strip_prefix("www.").unwrap_or(host);
        let domain = domain.strip_prefix("ww3.").unwrap_or(domain);

        let wanted = domain_key(domain);
        self.domain_mappings
            .iter()
            .find(|(key, _)| wanted.eq_ignore_ascii_case(&domain_key(key)))
            .map(|(_, mapped)| mapped.clone())
            .unwrap_or_else(|| domain.to_string())
    }
}

/// `mail.google.com` -> `mail_google_com`
pub fn domain_key(domain: &str) -> String {
    domain.replace('.', "_")
}
