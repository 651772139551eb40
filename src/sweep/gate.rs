//! Confirmation gate before any destructive action

use std::io::{self, BufRead, Write};

use crate::error::{Result, SweepError};
use crate::sweep::RunMode;

/// What the operator decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Explicit `y`/`Y`
    Proceed,
    /// Anything else, including empty input and EOF
    Declined,
    /// List-only run; the operator is never asked
    ListOnly,
}

/// Ask once whether to delete `count` issues
///
/// In list-only mode nothing is read or printed.
pub async fn confirm<R, W>(count: usize, mode: RunMode, input: R, out: &mut W) -> Result<GateDecision>
where
    R: BufRead + Send + 'static,
    W: Write,
{
    if mode == RunMode::ListOnly {
        return Ok(GateDecision::ListOnly);
    }

    let noun = if count == 1 { "issue" } else { "issues" };
    write!(out, "Delete these {} {}? [y/N] ", count, noun)?;
    out.flush()?;

    let answer = read_answer(input).await?;

    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(GateDecision::Proceed)
    } else {
        tracing::debug!(answer = %answer.trim(), "confirmation declined");
        Ok(GateDecision::Declined)
    }
}

/// Read one line on the blocking pool
///
/// The runtime thread stays free while the operator thinks, so a Ctrl-C
/// raced against the run is seen at the prompt.
async fn read_answer<R>(mut input: R) -> Result<String>
where
    R: BufRead + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut answer = String::new();
        input.read_line(&mut answer).map(|_| answer)
    })
    .await
    .map_err(|e| SweepError::Io(io::Error::other(e)))?
    .map_err(SweepError::from)
}
