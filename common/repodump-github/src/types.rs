//! Typed shapes of the raw GitHub API responses
//!
//! Every field is optional: a key missing from the payload (or present as
//! `null`) decodes to `None`. Deciding which fields are actually required is
//! left to the consumers of these types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A repository as returned by `GET /user/repos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub owner: Option<RepositoryOwner>,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
    pub ssh_url: Option<String>,
    pub stargazers_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub language: Option<String>,
    pub forks_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub id: Option<u64>,
    pub login: Option<String>,
}

/// A commit as returned by `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: Option<String>,
    pub url: Option<String>,
    pub commit: Option<CommitDetail>,
    pub html_url: Option<String>,
    pub comments_url: Option<String>,
    /// GitHub account of the author, kept as raw JSON
    pub author: Option<Value>,
    /// GitHub account of the committer, kept as raw JSON
    pub committer: Option<Value>,
    pub parents: Option<Vec<ParentCommit>>,
}

/// The git-level data nested under `commit`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitDetail {
    pub author: Option<CommitSignature>,
    pub committer: Option<CommitSignature>,
    pub message: Option<String>,
    pub tree: Option<CommitTree>,
    pub comment_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitSignature {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitTree {
    pub sha: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentCommit {
    pub sha: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
}
