//! Configuration file loading

use crate::records::CommitterSource;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options as they appear in a YAML configuration file.
///
/// Every key is optional; command-line flags are collected into the same
/// shape and layered on top by [`SettingsBuilder`](super::SettingsBuilder).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer_source: Option<CommitterSource>,
}

impl ConfigFile {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Layer `other` on top of `self`: values set in `other` win
    pub fn merged_with(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            user: other.user.or(self.user),
            token_file: other.token_file.or(self.token_file),
            repo_output: other.repo_output.or(self.repo_output),
            commit_output: other.commit_output.or(self.commit_output),
            api_base: other.api_base.or(self.api_base),
            committer_source: other.committer_source.or(self.committer_source),
        }
    }
}
