//! GitHub API integration module
//!
//! This module provides all GitHub-related functionality:
//! - The gateway trait and its octocrab-backed client
//! - Issue listing, node id lookup, and deletion
//! - User profile lookup
//! - Lookup response decoders
//! - Error classification

pub mod client;
pub mod decoder;
pub mod error_handler;
pub mod gateway;
pub mod issues;
pub mod users;

pub use client::GitHubClient;
pub use decoder::{decoder_for, FieldExtractor, JsonDecoder, NodeIdDecoder};
pub use gateway::ApiGateway;
pub use issues::{IssueHandler, IssueState, IssueSummary};
pub use users::{UserHandler, UserProfile};
