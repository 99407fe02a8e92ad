//! Repodump - dump a GitHub user's repositories and commits to CSV

pub mod commands;
pub mod config;
pub mod constants;
pub mod export;
pub mod records;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Settings, SettingsBuilder};
pub use export::{ExportPlan, ExportScope, ExportSummary, Exporter};
