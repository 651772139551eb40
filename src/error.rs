//! Custom error types for ghsweep
//!
//! User-friendly error messages for all failure scenarios, plus the mapping
//! from each failure to the process exit code.

use thiserror::Error;

/// Exit code for a bad invocation or unusable configuration
pub const EXIT_USAGE: i32 = 1;
/// Exit code when a required external tool is missing
pub const EXIT_MISSING_DEPENDENCY: i32 = 2;
/// Exit code when no usable GitHub credentials exist
pub const EXIT_NOT_AUTHENTICATED: i32 = 3;
/// Exit code when the GitHub API call itself failed
pub const EXIT_UPSTREAM: i32 = 4;
/// Exit code when a local file or terminal operation failed
pub const EXIT_LOCAL_IO: i32 = 5;
/// Exit code after Ctrl-C
pub const EXIT_INTERRUPTED: i32 = 130;

/// Main error type for the ghsweep tools
#[derive(Error, Debug)]
pub enum SweepError {
    /// Repository argument is not an `owner/name` pair
    #[error("Invalid repository '{0}'.\n\n  → Expected format: owner/name (e.g. acme/widgets)")]
    InvalidRepository(String),

    /// A required command-line tool is not installed
    #[error("Required tool '{tool}' was not found on PATH.\n\n  → Install it from {install_url}\n  → Or set GH_TOKEN / GITHUB_TOKEN to skip the '{tool}' lookup.")]
    MissingDependency {
        /// Executable that could not be spawned
        tool: String,
        /// Where to get it
        install_url: String,
    },

    /// User is not authenticated
    #[error("You are not logged in to GitHub.\n\n  → Run 'gh auth login', or export GH_TOKEN with a personal access token.")]
    NotAuthenticated,

    /// Token was rejected by GitHub
    #[error("GitHub rejected the credentials: {0}\n\n  → Run 'gh auth refresh', or check the token in GH_TOKEN / GITHUB_TOKEN.")]
    AuthenticationFailed(String),

    /// GitHub API error
    #[error("GitHub API request failed: {0}\n\n  → Check your internet connection.")]
    GitHubApi(String),

    /// GitHub answered 404 for the requested resource
    #[error("GitHub resource not found. {0}")]
    NotFound(String),

    /// The requested GitHub user does not exist
    #[error("User '{0}' not found on GitHub.")]
    UserNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),

    /// Ctrl-C received while the run was in progress
    #[error("Interrupted.")]
    Interrupted,
}

impl SweepError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::InvalidRepository(_)
            | SweepError::InvalidInput(_)
            | SweepError::Config(_)
            | SweepError::Toml(_) => EXIT_USAGE,
            SweepError::MissingDependency { .. } => EXIT_MISSING_DEPENDENCY,
            SweepError::NotAuthenticated | SweepError::AuthenticationFailed(_) => {
                EXIT_NOT_AUTHENTICATED
            }
            SweepError::GitHubApi(_)
            | SweepError::NotFound(_)
            | SweepError::UserNotFound(_)
            | SweepError::Json(_) => EXIT_UPSTREAM,
            SweepError::Io(_) => EXIT_LOCAL_IO,
            SweepError::Interrupted => EXIT_INTERRUPTED,
        }
    }
}

impl From<toml::de::Error> for SweepError {
    fn from(err: toml::de::Error) -> Self {
        SweepError::Toml(err.to_string())
    }
}

impl From<octocrab::Error> for SweepError {
    fn from(err: octocrab::Error) -> Self {
        crate::github::error_handler::classify_github_error(err)
    }
}

/// Result type alias using SweepError
pub type Result<T> = std::result::Result<T, SweepError>;
