//! Repository rows

use super::{Cell, MappingError, number, text};
use repodump_github::Repository;

pub const REPOSITORY_COLUMNS: usize = 16;

/// Header of the repository table, in row order
pub const REPOSITORY_HEADERS: [&str; REPOSITORY_COLUMNS] = [
    "id",
    "name",
    "full_name",
    "owner_id",
    "owner_login",
    "html_url",
    "description",
    "url",
    "created_at",
    "updated_at",
    "pushed_at",
    "ssh_url",
    "stargazers_count",
    "watchers_count",
    "language",
    "forks_count",
];

pub type RepositoryRow = [Cell; REPOSITORY_COLUMNS];

/// Flatten a repository into its 16 cells.
///
/// Top-level fields are all optional. `owner` itself is required; its `id`
/// and `login` are not.
pub fn map_repository(repo: &Repository) -> Result<RepositoryRow, MappingError> {
    let owner = repo.owner.as_ref().ok_or(MappingError::MissingField {
        record: "repository",
        field: "owner",
    })?;

    Ok([
        number(repo.id),
        text(&repo.name),
        text(&repo.full_name),
        number(owner.id),
        text(&owner.login),
        text(&repo.html_url),
        text(&repo.description),
        text(&repo.url),
        text(&repo.created_at),
        text(&repo.updated_at),
        text(&repo.pushed_at),
        text(&repo.ssh_url),
        number(repo.stargazers_count),
        number(repo.watchers_count),
        text(&repo.language),
        number(repo.forks_count),
    ])
}

/// Names of the listed repositories, in list order
pub fn repository_names(repos: &[Repository]) -> Result<Vec<String>, MappingError> {
    repos
        .iter()
        .map(|repo| {
            repo.name.clone().ok_or(MappingError::MissingField {
                record: "repository",
                field: "name",
            })
        })
        .collect()
}
