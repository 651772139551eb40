//! ghsweep - GitHub issue sweeping and user lookup tools
//!
//! This library backs two binaries: `gh-sweep`, which deletes every issue a
//! user opened in a repository after listing them and asking for
//! confirmation, and `gh-whois`, which prints a user's profile summary.

pub mod cli;
pub mod core;
pub mod error;
pub mod github;
pub mod sweep;

pub use error::{Result, SweepError};
