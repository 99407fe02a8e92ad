//! Flattening of raw GitHub records into fixed-column rows
//!
//! Each record kind has one schema: a header constant and a row type that is
//! a fixed-size array of the same length. A `None` cell is the null sentinel
//! and is written as an empty field.

pub mod commit;
pub mod repository;

pub use commit::{COMMIT_COLUMNS, COMMIT_HEADERS, CommitMapper, CommitRow, CommitterSource};
pub use repository::{
    REPOSITORY_COLUMNS, REPOSITORY_HEADERS, RepositoryRow, map_repository, repository_names,
};

/// A single output cell; `None` is the null sentinel
pub type Cell = Option<String>;

/// Errors raised while flattening a raw record
#[derive(Debug, Clone, PartialEq)]
pub enum MappingError {
    /// A field the row cannot be built without is absent
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    /// The commit URL is not under `/repos/<user>/<repo>/commits`
    UnrecognizedCommitUrl { url: String, user: String },
    /// The commit URL pattern could not be compiled
    InvalidPattern(String),
}

impl std::fmt::Display for MappingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingError::MissingField { record, field } => {
                write!(f, "{} record is missing required field '{}'", record, field)
            }
            MappingError::UnrecognizedCommitUrl { url, user } => {
                write!(
                    f,
                    "Commit URL '{}' does not match /repos/{}/<repository>/commits",
                    url, user
                )
            }
            MappingError::InvalidPattern(reason) => {
                write!(f, "Invalid commit URL pattern: {}", reason)
            }
        }
    }
}

impl std::error::Error for MappingError {}

pub(crate) fn text(value: &Option<String>) -> Cell {
    value.clone()
}

pub(crate) fn number(value: Option<u64>) -> Cell {
    value.map(|n| n.to_string())
}
