//! Authentication handling for GitHub API requests

use reqwest::RequestBuilder;

/// Credentials for the GitHub API: the account name and its personal access token.
///
/// The repository listing authenticates with HTTP basic auth (name + token),
/// the commit listing with a bearer token.
#[derive(Clone)]
pub struct GitHubAuth {
    user_name: String,
    token: String,
}

impl GitHubAuth {
    pub fn new(user_name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            token: token.into(),
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Apply HTTP basic authentication
    pub(crate) fn basic(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.user_name, Some(&self.token))
    }

    /// Apply bearer token authentication
    pub(crate) fn bearer(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

impl std::fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("user_name", &self.user_name)
            .field("token", &"***")
            .finish()
    }
}
