//! Repository coordinate parsing
//!
//! This module turns the `owner/name` argument into a validated
//! [`RepoSlug`]. Validation happens before any network call is made.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SweepError};

/// Characters GitHub accepts in account and repository names
static SLUG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$")
        .expect("Invalid regex pattern for repository slug")
});

/// Repository coordinate containing owner and repo name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoSlug {
    /// Parse an `owner/name` string
    ///
    /// Rejects a missing slash, empty halves (`owner/`, `/name`), extra path
    /// segments, and characters GitHub does not allow.
    pub fn parse(input: &str) -> Result<Self> {
        let caps = SLUG_PATTERN
            .captures(input.trim())
            .ok_or_else(|| SweepError::InvalidRepository(input.to_string()))?;

        Ok(Self {
            owner: caps[1].to_string(),
            name: caps[2].to_string(),
        })
    }
}

impl FromStr for RepoSlug {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slug() {
        let slug = RepoSlug::parse("acme/widgets").unwrap();
        assert_eq!(slug.owner, "acme");
        assert_eq!(slug.name, "widgets");
    }

    #[test]
    fn test_parse_slug_with_punctuation() {
        let slug = RepoSlug::parse("my-org_2/repo.rs").unwrap();
        assert_eq!(slug.owner, "my-org_2");
        assert_eq!(slug.name, "repo.rs");
    }

    #[test]
    fn test_malformed_slugs_rejected() {
        for bad in ["ownerOnly", "owner/", "/name", "", "/", "a/b/c", "own er/repo"] {
            let err = RepoSlug::parse(bad).unwrap_err();
            assert!(
                matches!(err, SweepError::InvalidRepository(_)),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let slug: RepoSlug = "acme/widgets".parse().unwrap();
        assert_eq!(slug.to_string(), "acme/widgets");
    }
}
