//! Issue sweep pipeline
//!
//! Lists a user's issues, records them in the run ledger, asks for
//! confirmation, then deletes them one by one:
//!
//! lister → ledger → (listing + gate) → deleter
//!
//! The two phases never overlap, so the ledger has one writer and one reader.

pub mod deleter;
pub mod gate;

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::core::{Config, DecoderKind, RepoSlug, RunLedger};
use crate::error::Result;
use crate::github::{ApiGateway, IssueHandler, IssueSummary};

pub use deleter::{IssueDeleter, ItemOutcome, Tally};
pub use gate::GateDecision;

/// Whether the run may delete anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// List, prompt, delete on `y`
    Interactive,
    /// List and stop
    ListOnly,
}

/// Everything a run needs, fixed before the first request
#[derive(Debug, Clone)]
pub struct SweepOptions {
    pub repo: RepoSlug,
    pub author: String,
    pub mode: RunMode,
    /// Pause after each processed issue
    pub request_delay: Duration,
    pub page_size: u8,
    pub decoder: DecoderKind,
}

impl SweepOptions {
    /// Fold parsed arguments and file configuration together
    pub fn new(repo: RepoSlug, author: String, mode: RunMode, config: &Config) -> Self {
        Self {
            repo,
            author,
            mode,
            request_delay: config.request_delay(),
            page_size: config.page_size,
            decoder: config.decoder,
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepReport {
    /// The user has no issues in the repository
    NoIssues,
    /// List-only mode
    Listed { count: usize },
    /// The operator did not confirm
    Cancelled { count: usize },
    /// The deletion pass ran over the whole list
    Completed(Tally),
}

/// Run the pipeline with a fresh ledger
///
/// `input` is only read for the confirmation answer.
pub async fn run<G, R, W>(
    gateway: &G,
    options: &SweepOptions,
    input: R,
    out: &mut W,
) -> Result<SweepReport>
where
    G: ApiGateway,
    R: BufRead + Send + 'static,
    W: Write,
{
    let ledger = RunLedger::create()?;
    run_with_ledger(gateway, options, ledger, input, out).await
}

/// Run the pipeline; the ledger is dropped (and its file removed) on return
pub async fn run_with_ledger<G, R, W>(
    gateway: &G,
    options: &SweepOptions,
    mut ledger: RunLedger,
    input: R,
    out: &mut W,
) -> Result<SweepReport>
where
    G: ApiGateway,
    R: BufRead + Send + 'static,
    W: Write,
{
    let repo = &options.repo;
    let author = options.author.as_str();

    writeln!(out, "Searching for issues created by '{}' in {}...", author, repo)?;
    out.flush()?;

    let issues = IssueHandler::new(gateway, options.page_size)
        .list_by_author(repo, author)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "issue listing failed"))?;

    if issues.is_empty() {
        writeln!(
            out,
            "No issues found for user '{}' in repository {}",
            author, repo
        )?;
        return Ok(SweepReport::NoIssues);
    }

    let count = ledger.record(issues.iter().map(|issue| issue.number))?;
    tracing::debug!(count, path = %ledger.path().display(), "ledger written");

    write_listing(&issues, count, options, out)?;

    match gate::confirm(count, options.mode, input, out).await? {
        GateDecision::ListOnly => {
            writeln!(out, "List-only mode: no issues were deleted.")?;
            return Ok(SweepReport::Listed { count });
        }
        GateDecision::Declined => {
            writeln!(out, "Operation cancelled")?;
            return Ok(SweepReport::Cancelled { count });
        }
        GateDecision::Proceed => {}
    }

    writeln!(out)?;
    let numbers = ledger.numbers()?;
    let deleter = IssueDeleter::new(gateway, options);
    let tally = deleter.delete_all(repo, &numbers, out).await?;
    deleter::write_summary(&tally, author, out)?;

    Ok(SweepReport::Completed(tally))
}

fn write_listing<W: Write>(
    issues: &[IssueSummary],
    count: usize,
    options: &SweepOptions,
    out: &mut W,
) -> Result<()> {
    let noun = if count == 1 { "issue" } else { "issues" };
    writeln!(
        out,
        "Found {} {} created by '{}' in {}:\n",
        count, noun, options.author, options.repo
    )?;

    for issue in issues {
        writeln!(
            out,
            "  #{:<6} {:<8} {}",
            issue.number,
            format!("[{}]", issue.state),
            issue.title
        )?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::error::SweepError;
    use crate::github::gateway::testing::ScriptedGateway;

    const THREE_ISSUES: &str = r#"[
        {"number": 10, "title": "Buy cheap watches", "state": "open"},
        {"number": 11, "title": "Free crypto", "state": "closed"},
        {"number": 12, "title": "Click here", "state": "open"}
    ]"#;

    fn options(mode: RunMode, decoder: DecoderKind) -> SweepOptions {
        SweepOptions {
            repo: RepoSlug::parse("acme/widgets").unwrap(),
            author: "spambot".to_string(),
            mode,
            request_delay: Duration::ZERO,
            page_size: 100,
            decoder,
        }
    }

    fn resolved(id: &str) -> Result<String> {
        Ok(format!(r#"{{"data":{{"repository":{{"issue":{{"id":"{}"}}}}}}}}"#, id))
    }

    fn deleted() -> Result<String> {
        Ok(r#"{"data":{"deleteIssue":{"clientMutationId":null}}}"#.to_string())
    }

    struct Run {
        report: Result<SweepReport>,
        output: String,
        ledger_path: std::path::PathBuf,
    }

    async fn sweep(gateway: &ScriptedGateway, opts: &SweepOptions, answer: &str) -> Run {
        let ledger = RunLedger::create().unwrap();
        let ledger_path = ledger.path().to_path_buf();
        let input = Cursor::new(answer.as_bytes().to_vec());
        let mut out = Vec::new();

        let report = run_with_ledger(gateway, opts, ledger, input, &mut out).await;

        Run {
            report,
            output: String::from_utf8(out).unwrap(),
            ledger_path,
        }
    }

    #[tokio::test]
    async fn test_scenario_all_deleted() {
        let gateway = ScriptedGateway::new();
        gateway.push_rest(Ok(THREE_ISSUES.to_string()));
        for id in ["I_10", "I_11", "I_12"] {
            gateway.push_graphql(resolved(id)).push_graphql(deleted());
        }

        let opts = options(RunMode::Interactive, DecoderKind::Json);
        let run = sweep(&gateway, &opts, "y\n").await;

        let tally = match run.report.unwrap() {
            SweepReport::Completed(tally) => tally,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(tally.succeeded, 3);
        assert_eq!(tally.attempted, 3);
        assert!(run
            .output
            .contains("Deleted 3/3 issues from user 'spambot'"));
        assert!(!run.output.contains("admin permissions"));
        assert!(!run.ledger_path.exists());
    }

    #[tokio::test]
    async fn test_scenario_declined() {
        let gateway = ScriptedGateway::new();
        gateway.push_rest(Ok(THREE_ISSUES.to_string()));

        let opts = options(RunMode::Interactive, DecoderKind::Json);
        let run = sweep(&gateway, &opts, "n\n").await;

        assert_eq!(run.report.unwrap(), SweepReport::Cancelled { count: 3 });
        assert!(run.output.contains("Operation cancelled"));
        assert_eq!(gateway.graphql_calls_containing("deleteIssue"), 0);
        assert!(!run.ledger_path.exists());
    }

    #[tokio::test]
    async fn test_scenario_null_node_id_does_not_abort() {
        let gateway = ScriptedGateway::new();
        gateway
            .push_rest(Ok(THREE_ISSUES.to_string()))
            .push_graphql(resolved("I_10"))
            .push_graphql(deleted())
            .push_graphql(Ok(r#"{"data":{"repository":{"issue":{"id":null}}}}"#.to_string()))
            .push_graphql(resolved("I_12"))
            .push_graphql(deleted());

        let opts = options(RunMode::Interactive, DecoderKind::FieldExtractor);
        let run = sweep(&gateway, &opts, "Y\n").await;

        let tally = match run.report.unwrap() {
            SweepReport::Completed(tally) => tally,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(tally.succeeded, 2);
        assert_eq!(tally.failed, 1);
        assert_eq!(gateway.graphql_calls_containing("deleteIssue"), 2);
        assert!(run.output.contains("✓ Deleted issue #10"));
        assert!(run.output.contains("✗ Could not resolve issue #11"));
        assert!(run.output.contains("✓ Deleted issue #12"));
        assert!(run.output.contains("Deleted 2/3"));
        assert!(run.output.contains("admin permissions"));
    }

    #[tokio::test]
    async fn test_scenario_no_issues() {
        let gateway = ScriptedGateway::new();
        gateway.push_rest(Ok("[]".to_string()));

        let mut opts = options(RunMode::Interactive, DecoderKind::Json);
        opts.author = "ghost".to_string();
        let run = sweep(&gateway, &opts, "y\n").await;

        assert_eq!(run.report.unwrap(), SweepReport::NoIssues);
        assert!(run
            .output
            .contains("No issues found for user 'ghost' in repository acme/widgets"));
        assert!(!run.output.contains("[y/N]"));
        assert_eq!(gateway.graphql_calls_containing("deleteIssue"), 0);
        assert!(!run.ledger_path.exists());
    }

    #[tokio::test]
    async fn test_list_only_never_prompts_or_deletes() {
        let gateway = ScriptedGateway::new();
        gateway.push_rest(Ok(THREE_ISSUES.to_string()));

        let opts = options(RunMode::ListOnly, DecoderKind::Json);
        let run = sweep(&gateway, &opts, "y\n").await;

        assert_eq!(run.report.unwrap(), SweepReport::Listed { count: 3 });
        assert!(!run.output.contains("[y/N]"));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_listing_count_matches_ledger() {
        let gateway = ScriptedGateway::new();
        gateway.push_rest(Ok(THREE_ISSUES.to_string()));

        let opts = options(RunMode::ListOnly, DecoderKind::Json);
        let mut ledger = RunLedger::create().unwrap();
        let input = Cursor::new(Vec::new());
        let mut out = Vec::new();

        // Drive the phases by hand so the ledger can be inspected before drop
        let issues = IssueHandler::new(&gateway, 100)
            .list_by_author(&opts.repo, &opts.author)
            .await
            .unwrap();
        let count = ledger.record(issues.iter().map(|i| i.number)).unwrap();
        write_listing(&issues, count, &opts, &mut out).unwrap();
        gate::confirm(count, opts.mode, input, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        let displayed = text.lines().filter(|l| l.trim_start().starts_with('#')).count();
        assert_eq!(ledger.numbers().unwrap().len(), displayed);
        assert!(text.contains("Found 3 issues created by 'spambot' in acme/widgets"));
        assert!(text.contains("  #10     [OPEN]   Buy cheap watches"));
        assert!(text.contains("  #11     [CLOSED] Free crypto"));
    }

    #[tokio::test]
    async fn test_listing_failure_aborts_before_prompt() {
        let gateway = ScriptedGateway::new();
        gateway.push_rest(Err(SweepError::GitHubApi("API rate limit exceeded".into())));

        let opts = options(RunMode::Interactive, DecoderKind::Json);
        let run = sweep(&gateway, &opts, "y\n").await;

        let err = run.report.unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(!run.output.contains("[y/N]"));
        assert!(!run.ledger_path.exists());
    }

    #[tokio::test]
    async fn test_dropped_run_removes_ledger() {
        let gateway = ScriptedGateway::new();
        gateway
            .push_rest(Ok(THREE_ISSUES.to_string()))
            .push_graphql(resolved("I_10"))
            .push_graphql(deleted());

        let mut opts = options(RunMode::Interactive, DecoderKind::Json);
        opts.request_delay = Duration::from_secs(3600);

        let ledger = RunLedger::create().unwrap();
        let ledger_path = ledger.path().to_path_buf();
        let input = Cursor::new(b"y\n".to_vec());
        let mut out = Vec::new();

        // Stand-in for Ctrl-C: the run is parked in the inter-item delay when
        // the other branch wins and the pipeline future is dropped
        let interrupted = tokio::select! {
            _ = run_with_ledger(&gateway, &opts, ledger, input, &mut out) => false,
            _ = tokio::time::sleep(Duration::from_millis(50)) => true,
        };

        assert!(interrupted);
        assert!(!ledger_path.exists());
        assert_eq!(gateway.graphql_calls_containing("deleteIssue"), 1);
    }
}
