//! Configuration validation utilities

use std::path::Path;

/// Longest user name GitHub accepts
const MAX_USER_NAME_LEN: usize = 39;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// No user name was configured
    MissingUserName,
    /// User name is not a valid GitHub login
    InvalidUserName(String),
    /// API base is not an http(s) URL
    InvalidApiBase(String),
    /// Both tables would be written to the same file
    SameOutputPath(String),
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValidationError::MissingUserName => {
                write!(
                    f,
                    "GitHub user name not provided. Use --user or set 'user' in the config file."
                )
            }
            ConfigValidationError::InvalidUserName(name) => {
                write!(f, "Invalid GitHub user name: '{}'", name)
            }
            ConfigValidationError::InvalidApiBase(url) => {
                write!(f, "API base must be an http:// or https:// URL: '{}'", url)
            }
            ConfigValidationError::SameOutputPath(path) => {
                write!(
                    f,
                    "Repository and commit output must be different files: '{}'",
                    path
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Validate a GitHub login: 1-39 ASCII alphanumerics or hyphens, with no
/// leading or trailing hyphen
pub fn validate_user_name(name: &str) -> Result<(), ConfigValidationError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_USER_NAME_LEN
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !name.starts_with('-')
        && !name.ends_with('-');

    if valid {
        Ok(())
    } else {
        Err(ConfigValidationError::InvalidUserName(name.to_string()))
    }
}

/// Validate the API base URL
pub fn validate_api_base(url: &str) -> Result<(), ConfigValidationError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(ConfigValidationError::InvalidApiBase(url.to_string())),
    }
}

/// Ensure the two tables are not written over each other
pub fn validate_output_paths(repo: &Path, commit: &Path) -> Result<(), ConfigValidationError> {
    if repo == commit {
        return Err(ConfigValidationError::SameOutputPath(
            repo.display().to_string(),
        ));
    }
    Ok(())
}
