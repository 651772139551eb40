//! GitHub token discovery and pre-flight checks
//!
//! ## Token Priority
//!
//! 1. `GH_TOKEN` environment variable
//! 2. `GITHUB_TOKEN` environment variable
//! 3. The GitHub CLI's stored session (`gh auth token`)
//!
//! The `gh` lookup is where the pre-flight failures come from: a missing
//! binary is a missing dependency, and a binary that yields no token means the
//! session is not authenticated.

use std::io;
use std::process::Command;

use secrecy::SecretString;

use crate::error::{Result, SweepError};

/// Environment variables checked for a token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Executable used as the credential source of last resort
pub const GH_PROGRAM: &str = "gh";

const GH_INSTALL_URL: &str = "https://cli.github.com";

/// Token manager for obtaining an access token before any API call
pub struct TokenManager;

impl TokenManager {
    /// Get an access token or fail with the matching environment error
    ///
    /// ## Errors
    ///
    /// - `MissingDependency` - no env token and `gh` is not installed
    /// - `NotAuthenticated` - `gh` is installed but has no session
    pub fn resolve() -> Result<SecretString> {
        if let Some(token) = Self::from_env(|key| std::env::var(key).ok()) {
            tracing::debug!("using token from environment");
            return Ok(token);
        }

        Self::from_gh_cli(GH_PROGRAM)
    }

    /// First non-empty token among [`TOKEN_ENV_VARS`]
    fn from_env<F>(lookup: F) -> Option<SecretString>
    where
        F: Fn(&str) -> Option<String>,
    {
        TOKEN_ENV_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(SecretString::from)
    }

    /// Ask the GitHub CLI for its stored token
    fn from_gh_cli(program: &str) -> Result<SecretString> {
        let output = match Command::new(program).args(["auth", "token"]).output() {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SweepError::MissingDependency {
                    tool: program.to_string(),
                    install_url: GH_INSTALL_URL.to_string(),
                });
            }
            Err(e) => return Err(SweepError::Io(e)),
        };

        if !output.status.success() {
            tracing::debug!(
                status = ?output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "gh auth token failed"
            );
            return Err(SweepError::NotAuthenticated);
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(SweepError::NotAuthenticated);
        }

        tracing::debug!("using token from gh CLI");
        Ok(SecretString::from(token))
    }
}
