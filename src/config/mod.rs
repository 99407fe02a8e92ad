//! Configuration management module

pub mod builder;
pub mod credentials;
pub mod loader;
pub mod validation;

pub use builder::{Settings, SettingsBuilder};
pub use credentials::read_token;
pub use loader::ConfigFile;
pub use validation::ConfigValidationError;
