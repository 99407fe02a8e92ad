//! Central constants for the repodump application

/// Default values for configuration
pub mod config {
    /// Directory under the home directory holding the token and output files
    pub const DEFAULT_DATA_DIR: &str = "code/github-api";

    /// Default token file name
    pub const DEFAULT_TOKEN_FILE: &str = "github_personal_token.txt";

    /// Default repository table file name
    pub const DEFAULT_REPO_OUTPUT: &str = "repo_data.csv";

    /// Default commit table file name
    pub const DEFAULT_COMMIT_OUTPUT: &str = "commit_data.csv";
}
