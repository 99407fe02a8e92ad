//! Constants shared by the GitHub API operations

/// GitHub API base URL
pub const API_BASE: &str = "https://api.github.com";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("repodump/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the commits endpoint
pub const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Number of commits requested per page (the API maximum)
pub const COMMITS_PER_PAGE: u32 = 100;

/// Highest commit page requested for a single repository.
///
/// Pagination stops here even if the page was full, so at most
/// `COMMITS_PER_PAGE * MAX_COMMIT_PAGES` commits are returned per repository.
pub const MAX_COMMIT_PAGES: u32 = 99;
