//! User summary command handler

use crate::cli::commands::WhoisCli;
use crate::error::{Result, SweepError};
use crate::github::{GitHubClient, UserHandler, UserProfile};

/// Handle `gh-whois USERNAME [-j]`
pub async fn handle_whois(args: WhoisCli) -> Result<()> {
    let username = args.username.trim();
    if username.is_empty() {
        return Err(SweepError::InvalidInput(
            "A GitHub username is required".to_string(),
        ));
    }

    let client = GitHubClient::from_environment()?;
    let handler = UserHandler::new(&client);
    let raw = handler.fetch_raw(username).await?;

    println!("{}", render(&raw, args.json)?);
    Ok(())
}

/// Pretty JSON in `--json` mode, the formatted report otherwise
fn render(raw: &str, json: bool) -> Result<String> {
    if json {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        Ok(serde_json::to_string_pretty(&value)?)
    } else {
        let profile = UserProfile::from_json(raw)?;
        Ok(profile.report().trim_end().to_string())
    }
}
