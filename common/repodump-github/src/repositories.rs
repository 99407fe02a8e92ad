//! Repository-related operations

use crate::client::{GitHubClient, decode_list};
use crate::types::Repository;
use anyhow::{Context, Result};

impl GitHubClient {
    /// List the authenticated user's repositories
    ///
    /// Issues a single `GET /user/repos` with basic authentication. Only the
    /// first page the API returns is read.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not a JSON array
    /// of repositories.
    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        let url = format!("{}/user/repos", self.base_url);

        let response = self
            .auth
            .basic(self.get(&url))
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?;

        decode_list(response).await
    }
}
