//! Commit history operations

use crate::client::{GitHubClient, decode_list};
use crate::constants::{ACCEPT_GITHUB_JSON, COMMITS_PER_PAGE, MAX_COMMIT_PAGES};
use crate::types::Commit;
use anyhow::{Context, Result};

impl GitHubClient {
    /// List every commit of one of the user's repositories
    ///
    /// Pages are fetched in order starting at page 1 and concatenated. The
    /// walk stops at the first empty page, or after page
    /// [`MAX_COMMIT_PAGES`] even if that page was full.
    ///
    /// # Arguments
    /// * `repo_name` - Repository name under the client's user
    ///
    /// # Errors
    /// Returns an error if any page request fails or a page is not a JSON
    /// array of commits.
    pub async fn list_commits(&self, repo_name: &str) -> Result<Vec<Commit>> {
        let mut commits = Vec::new();

        for page in 1..=MAX_COMMIT_PAGES {
            let batch = self
                .fetch_commit_page(repo_name, page)
                .await
                .with_context(|| {
                    format!("Failed to list commits for {} (page {})", repo_name, page)
                })?;

            if batch.is_empty() {
                break;
            }
            commits.extend(batch);
        }

        Ok(commits)
    }

    async fn fetch_commit_page(&self, repo_name: &str, page: u32) -> Result<Vec<Commit>> {
        let url = format!(
            "{}/repos/{}/{}/commits",
            self.base_url,
            self.user_name(),
            repo_name
        );

        let response = self
            .auth
            .bearer(self.get(&url))
            .header("Accept", ACCEPT_GITHUB_JSON)
            .query(&[("per_page", COMMITS_PER_PAGE), ("page", page)])
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?;

        decode_list(response).await
    }
}
