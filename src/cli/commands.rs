//! CLI command definitions using clap
//!
//! Defines the argument structure for `gh-sweep` and `gh-whois`.

use clap::Parser;

use crate::core::RepoSlug;
use crate::error::EXIT_USAGE;

/// gh-sweep - delete every issue a user opened in a repository
///
/// Lists all issues (open and closed) created by USERNAME in REPO, asks for
/// confirmation, then deletes them one at a time. Deleting issues requires
/// admin permissions on the repository.
#[derive(Parser, Debug)]
#[command(name = "gh-sweep", version, about, long_about = None)]
pub struct SweepCli {
    /// Repository in owner/name form (e.g. acme/widgets)
    #[arg(value_name = "REPO", value_parser = parse_repo)]
    pub repo: RepoSlug,

    /// GitHub username whose issues should be deleted
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// Only list the issues; never prompt or delete
    #[arg(short = 'l', long = "list")]
    pub list_only: bool,
}

/// gh-whois - show a GitHub user's profile summary
#[derive(Parser, Debug)]
#[command(name = "gh-whois", version, about, long_about = None)]
pub struct WhoisCli {
    /// GitHub username to look up
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// Print the raw profile JSON instead of the report
    #[arg(short, long)]
    pub json: bool,
}

fn parse_repo(value: &str) -> std::result::Result<RepoSlug, String> {
    RepoSlug::parse(value).map_err(|_| {
        format!(
            "'{}' is not a repository; expected owner/name (e.g. acme/widgets)",
            value
        )
    })
}

/// Parse arguments, exiting 0 for help/version and 1 for anything invalid
///
/// clap's own default for usage errors is exit code 2, which these tools
/// reserve for a missing dependency.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definitions() {
        SweepCli::command().debug_assert();
        WhoisCli::command().debug_assert();
    }

    #[test]
    fn test_sweep_args() {
        let cli = SweepCli::try_parse_from(["gh-sweep", "acme/widgets", "spambot"]).unwrap();
        assert_eq!(cli.repo.owner, "acme");
        assert_eq!(cli.repo.name, "widgets");
        assert_eq!(cli.username, "spambot");
        assert!(!cli.list_only);

        let cli =
            SweepCli::try_parse_from(["gh-sweep", "-l", "acme/widgets", "spambot"]).unwrap();
        assert!(cli.list_only);
    }

    #[test]
    fn test_sweep_rejects_malformed_repo() {
        for bad in ["ownerOnly", "owner/", "/name"] {
            let err = SweepCli::try_parse_from(["gh-sweep", bad, "spambot"]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
            assert!(err.use_stderr());
        }
    }

    #[test]
    fn test_sweep_requires_username() {
        let err = SweepCli::try_parse_from(["gh-sweep", "acme/widgets"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_whois_args() {
        let cli = WhoisCli::try_parse_from(["gh-whois", "--json", "octocat"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.username, "octocat");

        let cli = WhoisCli::try_parse_from(["gh-whois", "-j", "octocat"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_whois_takes_exactly_one_username() {
        assert!(WhoisCli::try_parse_from(["gh-whois"]).is_err());
        assert!(WhoisCli::try_parse_from(["gh-whois", "a", "b"]).is_err());
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = SweepCli::try_parse_from(["gh-sweep", "-h"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
