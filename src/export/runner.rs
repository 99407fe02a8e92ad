//! Repository and commit export sequence

use super::table::write_rows;
use crate::records::{
    COMMIT_HEADERS, CommitMapper, CommitRow, REPOSITORY_HEADERS, RepositoryRow, map_repository,
    repository_names,
};
use anyhow::{Context, Result};
use colored::*;
use repodump_github::GitHubClient;
use std::path::{Path, PathBuf};

/// Which tables an export writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    All,
    Repositories,
    Commits,
}

impl ExportScope {
    fn writes_repositories(self) -> bool {
        matches!(self, ExportScope::All | ExportScope::Repositories)
    }

    fn writes_commits(self) -> bool {
        matches!(self, ExportScope::All | ExportScope::Commits)
    }
}

/// What to export and where to put it
#[derive(Debug, Clone)]
pub struct ExportPlan {
    pub scope: ExportScope,
    pub repo_output: PathBuf,
    pub commit_output: PathBuf,
}

/// Counts of exported records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub repositories: usize,
    pub commits: usize,
}

/// Fetches, flattens and writes a user's repositories and commits
pub struct Exporter {
    client: GitHubClient,
    commit_mapper: CommitMapper,
}

impl Exporter {
    pub fn new(client: GitHubClient, commit_mapper: CommitMapper) -> Self {
        Self {
            client,
            commit_mapper,
        }
    }

    /// Run the export described by `plan`.
    ///
    /// Requests are issued one at a time. The first failing request, mapping
    /// or write aborts the run; files written before the failure are kept.
    pub async fn run(&self, plan: &ExportPlan) -> Result<ExportSummary> {
        let repositories = self
            .client
            .list_repositories()
            .await
            .context("Failed to list repositories")?;

        let repo_rows = repositories
            .iter()
            .map(map_repository)
            .collect::<Result<Vec<RepositoryRow>, _>>()?;

        println!(
            "{}",
            format!("Found {} repositories", repo_rows.len()).green()
        );

        if plan.scope.writes_repositories() {
            write_table(&plan.repo_output, &REPOSITORY_HEADERS, &repo_rows)?;
        }

        let mut summary = ExportSummary {
            repositories: repo_rows.len(),
            commits: 0,
        };

        if !plan.scope.writes_commits() {
            return Ok(summary);
        }

        let mut commits = Vec::new();
        for name in repository_names(&repositories)? {
            let batch = self.client.list_commits(&name).await?;
            println!(
                "{} | {}",
                name.cyan().bold(),
                format!("{} commits", batch.len()).green()
            );
            commits.extend(batch);
        }

        let commit_rows = commits
            .iter()
            .map(|commit| self.commit_mapper.map(commit))
            .collect::<Result<Vec<CommitRow>, _>>()?;

        write_table(&plan.commit_output, &COMMIT_HEADERS, &commit_rows)?;
        summary.commits = commit_rows.len();

        Ok(summary)
    }
}

fn write_table<const N: usize>(
    path: &Path,
    header: &[&str; N],
    rows: &[[Option<String>; N]],
) -> Result<()> {
    let written = write_rows(path, Some(&header[..]), rows)?;
    println!(
        "{} | {}",
        path.display().to_string().cyan().bold(),
        format!("Wrote {} rows", written).green()
    );
    Ok(())
}
