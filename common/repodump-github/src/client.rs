//! GitHub client implementation

use crate::auth::GitHubAuth;
use crate::constants::{API_BASE, DEFAULT_USER_AGENT};
use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Longest slice of a response body quoted in decode errors
const BODY_EXCERPT_LEN: usize = 200;

/// GitHub API client for making authenticated requests
///
/// Operations are split across modules that extend this client with
/// `impl` blocks:
/// - `repositories.rs` - the authenticated user's repositories
/// - `commits.rs` - paginated commit history
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) auth: GitHubAuth,
    pub(crate) base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client for `user_name` authenticating with `token`
    pub fn new(user_name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            auth: GitHubAuth::new(user_name, token),
            base_url: API_BASE.to_string(),
        }
    }

    /// Point the client at another API root (GitHub Enterprise, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_name(&self) -> &str {
        self.auth.user_name()
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .header("User-Agent", DEFAULT_USER_AGENT)
    }
}

/// Decode a JSON array response body.
///
/// The status code is deliberately not checked: the body is authoritative. An
/// error payload (e.g. `{"message": "Bad credentials"}`) fails here because it
/// is not an array, and the error reports the status alongside the body.
pub(crate) async fn decode_list<T: DeserializeOwned>(response: Response) -> Result<Vec<T>> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    serde_json::from_str(&body).with_context(|| {
        format!(
            "Failed to parse GitHub API response from {} ({}): {}",
            url,
            status,
            excerpt(&body)
        )
    })
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
