//! gh-sweep - bulk-delete a user's issues from a GitHub repository
//!
//! Lists every issue USERNAME opened in REPO, asks for confirmation, then
//! deletes them one at a time. Use `-l` to only list.

use tracing_subscriber::EnvFilter;

use ghsweep::cli::sweep::handle_sweep;
use ghsweep::cli::{parse_or_exit, until_interrupted, SweepCli};

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli: SweepCli = parse_or_exit();

    // Dropping the pipeline future on Ctrl-C drops the run ledger with it
    if let Err(e) = until_interrupted(handle_sweep(cli)).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
