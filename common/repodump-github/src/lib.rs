//! GitHub API client library
//!
//! This library provides the two read-only GitHub REST operations needed to
//! dump a user's repositories and their commit history.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`auth`]: Credentials and request authentication
//! - [`repositories`]: Listing the authenticated user's repositories
//! - [`commits`]: Paginated commit history for a repository
//! - [`types`]: Typed shapes of the raw API responses

mod auth;
mod client;
mod commits;
mod repositories;
mod types;

pub mod constants;

// Re-export public API
pub use auth::GitHubAuth;
pub use client::GitHubClient;
pub use types::{
    Commit, CommitDetail, CommitSignature, CommitTree, ParentCommit, Repository, RepositoryOwner,
};
