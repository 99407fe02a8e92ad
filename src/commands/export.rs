//! Export command implementation

use super::{Command, CommandContext};
use crate::config::read_token;
use crate::export::{ExportPlan, ExportScope, Exporter};
use crate::records::CommitMapper;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use repodump_github::GitHubClient;

/// Export command writing one or both CSV tables
pub struct ExportCommand {
    pub scope: ExportScope,
}

#[async_trait]
impl Command for ExportCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.settings;
        let token = read_token(&settings.token_file)?;

        let client = GitHubClient::new(settings.user_name.clone(), token)
            .with_base_url(settings.api_base.clone());
        let commit_mapper = CommitMapper::new(&settings.api_base, &settings.user_name)?
            .with_committer_source(settings.committer_source);

        let plan = ExportPlan {
            scope: self.scope,
            repo_output: settings.repo_output.clone(),
            commit_output: settings.commit_output.clone(),
        };

        let summary = Exporter::new(client, commit_mapper).run(&plan).await?;

        let message = match self.scope {
            ExportScope::Repositories => {
                format!("Exported {} repositories", summary.repositories)
            }
            ExportScope::All | ExportScope::Commits => format!(
                "Exported {} commits across {} repositories",
                summary.commits, summary.repositories
            ),
        };
        println!("{}", message.green());

        Ok(())
    }
}
