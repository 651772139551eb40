//! Ctrl-C handling for the binaries

use std::future::Future;

use crate::error::{Result, SweepError};

/// Drive `task` until it finishes or Ctrl-C arrives
///
/// On Ctrl-C the task future is dropped mid-flight, releasing whatever it
/// owns (the run ledger included), and `Interrupted` is returned. The signal
/// branch is polled first so the handler is installed before the task starts.
///
/// A prompt read still parked on the blocking pool keeps the runtime from
/// shutting down, so callers exit the process right after an interrupt.
pub async fn until_interrupted<T, F>(task: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::debug!("interrupted");
            Err(SweepError::Interrupted)
        }
        result = task => result,
    }
}
