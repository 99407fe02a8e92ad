use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use repodump::commands::{Command, CommandContext, ExportCommand};
use repodump::config::{ConfigFile, SettingsBuilder};
use repodump::export::ExportScope;
use repodump::records::CommitterSource;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repodump")]
#[command(about = "Dump a GitHub user's repositories and commits to CSV files")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct Options {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// GitHub user name
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// File containing the GitHub personal access token
    #[arg(long, global = true)]
    token_file: Option<String>,

    /// Output path for the repository table
    #[arg(long, global = true)]
    repo_output: Option<String>,

    /// Output path for the commit table
    #[arg(long, global = true)]
    commit_output: Option<String>,

    /// GitHub API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Source of the committer columns in the commit table
    #[arg(long, global = true, value_enum)]
    committer_source: Option<CommitterSource>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export repositories and commits (default)
    Export,
    /// Export the repository table only
    Repos,
    /// Export the commit table only
    Commits,
}

impl Options {
    fn into_overrides(self) -> (Option<PathBuf>, ConfigFile) {
        let overrides = ConfigFile {
            user: self.user,
            token_file: self.token_file,
            repo_output: self.repo_output,
            commit_output: self.commit_output,
            api_base: self.api_base,
            committer_source: self.committer_source,
        };
        (self.config, overrides)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let scope = match cli.command.unwrap_or(Commands::Export) {
        Commands::Export => ExportScope::All,
        Commands::Repos => ExportScope::Repositories,
        Commands::Commits => ExportScope::Commits,
    };

    let (config_path, overrides) = cli.options.into_overrides();
    let file = match config_path {
        Some(path) => ConfigFile::load(&path)?,
        None => ConfigFile::default(),
    };

    let settings = SettingsBuilder::new()
        .with_file(file)
        .with_overrides(overrides)
        .build()?;

    let context = CommandContext { settings };
    ExportCommand { scope }.execute(&context).await?;

    Ok(())
}
