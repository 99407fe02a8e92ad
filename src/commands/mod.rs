//! Command implementations

pub mod base;
pub mod export;

pub use base::{Command, CommandContext};
pub use export::ExportCommand;
