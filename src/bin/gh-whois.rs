//! gh-whois - print a summary of a GitHub user's profile
//!
//! Exit codes: 0 success, 1 bad arguments, 2 missing dependency,
//! 3 not authenticated, 4 user not found or fetch failure, 5 local I/O failure.

use tracing_subscriber::EnvFilter;

use ghsweep::cli::whois::handle_whois;
use ghsweep::cli::{parse_or_exit, WhoisCli};

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli: WhoisCli = parse_or_exit();

    if let Err(e) = handle_whois(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
