//! Issue sweep command handler

use std::io;

use crate::cli::commands::SweepCli;
use crate::core::Config;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::sweep::{self, RunMode, SweepOptions, SweepReport};

/// Handle `gh-sweep REPO USERNAME [-l]`
pub async fn handle_sweep(args: SweepCli) -> Result<()> {
    let config = Config::load()?;
    let mode = if args.list_only {
        RunMode::ListOnly
    } else {
        RunMode::Interactive
    };
    let options = SweepOptions::new(args.repo, args.username, mode, &config);
    tracing::debug!(?options, "sweep options");

    // Pre-flight: no request is sent unless a token is available
    let client = GitHubClient::from_environment()?;

    let input = io::BufReader::new(io::stdin());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = sweep::run(&client, &options, input, &mut out).await?;

    match &report {
        SweepReport::Completed(tally) => tracing::info!(
            succeeded = tally.succeeded,
            failed = tally.failed,
            "sweep completed"
        ),
        other => tracing::info!(?other, "sweep ended without deleting"),
    }

    Ok(())
}
