//! Core functionality for ghsweep
//!
//! This module contains shared plumbing:
//! - Repository coordinate parsing
//! - Token discovery and pre-flight checks
//! - The transient run ledger
//! - Application configuration

pub mod config;
pub mod ledger;
pub mod repository;
pub mod token_manager;

pub use config::{Config, DecoderKind};
pub use ledger::RunLedger;
pub use repository::RepoSlug;
pub use token_manager::TokenManager;
