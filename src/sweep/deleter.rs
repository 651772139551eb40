//! Sequential best-effort issue deletion
//!
//! Each issue walks `Pending → Resolving → {Resolved, ResolutionFailed}` and
//! then `Resolved → Deleting → {Deleted, DeleteFailed}`. A failure ends that
//! issue only; the loop always covers the whole list.

use std::io::Write;
use std::time::Duration;

use crate::core::RepoSlug;
use crate::error::Result;
use crate::github::{decoder_for, ApiGateway, IssueHandler, NodeIdDecoder};
use crate::sweep::SweepOptions;

/// Terminal state of one issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Mutation succeeded
    Deleted,
    /// Lookup failed or returned no node id; no mutation was sent
    ResolutionFailed(String),
    /// Mutation was sent and failed
    DeleteFailed(String),
}

impl ItemOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ItemOutcome::Deleted)
    }

    /// Whether a delete mutation was issued for this item
    pub fn reached_delete(&self) -> bool {
        matches!(self, ItemOutcome::Deleted | ItemOutcome::DeleteFailed(_))
    }
}

/// Counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Delete mutations actually sent
    pub deletes_issued: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: &ItemOutcome) {
        self.attempted += 1;
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        if outcome.reached_delete() {
            self.deletes_issued += 1;
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Deletes issues one at a time with a fixed pause between them
pub struct IssueDeleter<'a, G: ApiGateway> {
    issues: IssueHandler<'a, G>,
    decoder: Box<dyn NodeIdDecoder>,
    delay: Duration,
}

impl<'a, G: ApiGateway> IssueDeleter<'a, G> {
    pub fn new(gateway: &'a G, options: &SweepOptions) -> Self {
        Self {
            issues: IssueHandler::new(gateway, options.page_size),
            decoder: decoder_for(options.decoder),
            delay: options.request_delay,
        }
    }

    /// Resolve and delete a single issue
    pub async fn delete_one(&self, repo: &RepoSlug, number: u64) -> ItemOutcome {
        tracing::debug!(number, "resolving node id");
        let node_id = match self
            .issues
            .resolve_node_id(repo, number, self.decoder.as_ref())
            .await
        {
            Ok(Some(id)) => id,
            Ok(None) => {
                tracing::debug!(number, "lookup returned no node id");
                return ItemOutcome::ResolutionFailed("no node id returned".to_string());
            }
            Err(e) => {
                tracing::debug!(number, error = %e, "lookup failed");
                return ItemOutcome::ResolutionFailed(first_line(&e.to_string()));
            }
        };

        tracing::debug!(number, %node_id, "deleting");
        match self.issues.delete(&node_id).await {
            Ok(()) => ItemOutcome::Deleted,
            Err(e) => {
                tracing::debug!(number, error = %e, "delete failed");
                ItemOutcome::DeleteFailed(first_line(&e.to_string()))
            }
        }
    }

    /// Process every number in order and report each outcome
    ///
    /// Only write errors on `out` end the loop early.
    pub async fn delete_all<W: Write>(
        &self,
        repo: &RepoSlug,
        numbers: &[u64],
        out: &mut W,
    ) -> Result<Tally> {
        let mut tally = Tally::default();

        for &number in numbers {
            let outcome = self.delete_one(repo, number).await;

            match &outcome {
                ItemOutcome::Deleted => writeln!(out, "✓ Deleted issue #{}", number)?,
                ItemOutcome::ResolutionFailed(reason) => {
                    writeln!(out, "✗ Could not resolve issue #{}: {}", number, reason)?
                }
                ItemOutcome::DeleteFailed(reason) => {
                    writeln!(out, "✗ Failed to delete issue #{}: {}", number, reason)?
                }
            }
            out.flush()?;

            tally.record(&outcome);
            tokio::time::sleep(self.delay).await;
        }

        tracing::info!(
            attempted = tally.attempted,
            succeeded = tally.succeeded,
            failed = tally.failed,
            "deletion pass finished"
        );
        Ok(tally)
    }
}

/// Closing report line plus the permissions hint when anything failed
pub fn write_summary<W: Write>(tally: &Tally, author: &str, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Deleted {}/{} issues from user '{}'",
        tally.succeeded, tally.attempted, author
    )?;
    if tally.has_failures() {
        writeln!(
            out,
            "Note: {} issue(s) could not be deleted. Deleting issues requires admin permissions on the repository.",
            tally.failed
        )?;
    }
    Ok(())
}

fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or_default().to_string()
}
