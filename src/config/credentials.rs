//! Access token file handling

use anyhow::{Context, Result, bail};
use std::path::Path;

/// Read a personal access token from `path`, trimming surrounding whitespace
pub fn read_token(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read GitHub token file {}", path.display()))?;

    let token = content.trim();
    if token.is_empty() {
        bail!("GitHub token file {} is empty", path.display());
    }
    Ok(token.to_string())
}
