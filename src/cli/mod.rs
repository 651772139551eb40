//! CLI module for ghsweep
//!
//! This module contains the clap definitions and the command handlers for
//! both binaries.

pub mod commands;
pub mod signal;
pub mod sweep;
pub mod whois;

pub use commands::{parse_or_exit, SweepCli, WhoisCli};
pub use signal::until_interrupted;
