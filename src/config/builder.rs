//! Resolution of the effective export settings

use super::loader::ConfigFile;
use super::validation;
use crate::constants::config::{
    DEFAULT_COMMIT_OUTPUT, DEFAULT_DATA_DIR, DEFAULT_REPO_OUTPUT, DEFAULT_TOKEN_FILE,
};
use crate::records::CommitterSource;
use anyhow::{Result, anyhow};
use repodump_github::constants::API_BASE;
use std::path::{Path, PathBuf};

/// Fully resolved settings for one export run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub user_name: String,
    pub token_file: PathBuf,
    pub repo_output: PathBuf,
    pub commit_output: PathBuf,
    pub api_base: String,
    pub committer_source: CommitterSource,
}

/// Builder layering command-line flags over a config file over defaults
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    file: ConfigFile,
    overrides: ConfigFile,
    home: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Create a new builder using the current user's home directory
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
            ..Default::default()
        }
    }

    /// Use values from a loaded config file
    pub fn with_file(mut self, file: ConfigFile) -> Self {
        self.file = file;
        self
    }

    /// Use values given on the command line; these win over the file
    pub fn with_overrides(mut self, overrides: ConfigFile) -> Self {
        self.overrides = overrides;
        self
    }

    /// Set the directory `~` and the default paths resolve against
    pub fn with_home(mut self, home: PathBuf) -> Self {
        self.home = Some(home);
        self
    }

    /// Resolve and validate the settings
    pub fn build(self) -> Result<Settings> {
        let home = self.home;
        let merged = self.file.merged_with(self.overrides);

        let user_name = merged
            .user
            .ok_or(validation::ConfigValidationError::MissingUserName)?;
        validation::validate_user_name(&user_name)?;

        let api_base = merged
            .api_base
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| API_BASE.to_string());
        validation::validate_api_base(&api_base)?;

        let token_file = resolve_path(merged.token_file, DEFAULT_TOKEN_FILE, home.as_deref())?;
        let repo_output = resolve_path(merged.repo_output, DEFAULT_REPO_OUTPUT, home.as_deref())?;
        let commit_output =
            resolve_path(merged.commit_output, DEFAULT_COMMIT_OUTPUT, home.as_deref())?;
        validation::validate_output_paths(&repo_output, &commit_output)?;

        Ok(Settings {
            user_name,
            token_file,
            repo_output,
            commit_output,
            api_base,
            committer_source: merged.committer_source.unwrap_or_default(),
        })
    }
}

fn resolve_path(value: Option<String>, default_name: &str, home: Option<&Path>) -> Result<PathBuf> {
    match value {
        Some(path) => expand_home(&path, home),
        None => Ok(require_home(home)?.join(DEFAULT_DATA_DIR).join(default_name)),
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &str, home: Option<&Path>) -> Result<PathBuf> {
    if path == "~" {
        return Ok(require_home(home)?.to_path_buf());
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(require_home(home)?.join(rest));
    }
    Ok(PathBuf::from(path))
}

fn require_home(home: Option<&Path>) -> Result<&Path> {
    home.ok_or_else(|| anyhow!("Unable to determine the home directory"))
}
