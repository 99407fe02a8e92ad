//! Commit rows

use super::{Cell, MappingError, number, text};
use regex::Regex;
use repodump_github::{Commit, CommitSignature};
use serde::{Deserialize, Serialize};

pub const COMMIT_COLUMNS: usize = 20;

/// Header of the commit table, in row order.
///
/// Downstream consumers key on these exact names, including the repeated
/// `committer_author` and the `commit_mesage` spelling.
pub const COMMIT_HEADERS: [&str; COMMIT_COLUMNS] = [
    "repo_name",
    "sha",
    "commit_author",
    "commit_email",
    "commit_date",
    "committer_author",
    "committer_author",
    "committer_date",
    "commit_mesage",
    "commit_tree_sha",
    "commit_tree_url",
    "commit_comment_count",
    "url",
    "html_url",
    "comments_url",
    "author",
    "committer",
    "parent_sha",
    "parent_url",
    "parent_html_url",
];

pub type CommitRow = [Cell; COMMIT_COLUMNS];

/// Where the three committer columns are read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CommitterSource {
    /// Repeat `commit.author` (the established table layout)
    #[default]
    Author,
    /// Read `commit.committer`
    Committer,
}

/// Flattens commits of one user's repositories
#[derive(Debug, Clone)]
pub struct CommitMapper {
    user_name: String,
    url_pattern: Regex,
    committer_source: CommitterSource,
}

impl CommitMapper {
    /// Create a mapper for commits listed under `{api_base}/repos/{user_name}/`
    pub fn new(api_base: &str, user_name: &str) -> Result<Self, MappingError> {
        let pattern = format!(
            r"^{}/repos/{}/(.*)/commits",
            regex::escape(api_base.trim_end_matches('/')),
            regex::escape(user_name)
        );
        let url_pattern =
            Regex::new(&pattern).map_err(|e| MappingError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            user_name: user_name.to_string(),
            url_pattern,
            committer_source: CommitterSource::default(),
        })
    }

    pub fn with_committer_source(mut self, source: CommitterSource) -> Self {
        self.committer_source = source;
        self
    }

    /// Extract the repository name from a commit API URL
    pub fn repository_name<'a>(&self, url: &'a str) -> Result<&'a str, MappingError> {
        self.url_pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| MappingError::UnrecognizedCommitUrl {
                url: url.to_string(),
                user: self.user_name.clone(),
            })
    }

    /// Flatten a commit into its 20 cells.
    ///
    /// `url`, `commit`, `commit.author`, `commit.tree` and `parents` are
    /// required. An empty `parents` list (a root commit) yields null parent
    /// cells.
    pub fn map(&self, commit: &Commit) -> Result<CommitRow, MappingError> {
        let url = commit.url.as_deref().ok_or(missing("url"))?;
        let repo_name = self.repository_name(url)?;

        let detail = commit.commit.as_ref().ok_or(missing("commit"))?;
        let author = detail.author.as_ref().ok_or(missing("commit.author"))?;
        let tree = detail.tree.as_ref().ok_or(missing("commit.tree"))?;
        let committer = match self.committer_source {
            CommitterSource::Author => Some(author),
            CommitterSource::Committer => detail.committer.as_ref(),
        };

        let parents = commit.parents.as_ref().ok_or(missing("parents"))?;
        let parent = parents.first();

        let [author_name, author_email, author_date] = signature(Some(author));
        let [committer_name, committer_email, committer_date] = signature(committer);

        Ok([
            Some(repo_name.to_string()),
            text(&commit.sha),
            author_name,
            author_email,
            author_date,
            committer_name,
            committer_email,
            committer_date,
            text(&detail.message),
            text(&tree.sha),
            text(&tree.url),
            number(detail.comment_count),
            Some(url.to_string()),
            text(&commit.html_url),
            text(&commit.comments_url),
            commit.author.as_ref().map(|v| v.to_string()),
            commit.committer.as_ref().map(|v| v.to_string()),
            parent.and_then(|p| p.sha.clone()),
            parent.and_then(|p| p.url.clone()),
            parent.and_then(|p| p.html_url.clone()),
        ])
    }
}

fn missing(field: &'static str) -> MappingError {
    MappingError::MissingField {
        record: "commit",
        field,
    }
}

fn signature(sig: Option<&CommitSignature>) -> [Cell; 3] {
    match sig {
        Some(sig) => [text(&sig.name), text(&sig.email), text(&sig.date)],
        None => [None, None, None],
    }
}
