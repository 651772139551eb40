//! Transient run ledger
//!
//! Holds the issue numbers discovered in one run, one per line, in a
//! temporary file. The lister writes it once and the deleter reads it back.
//! The file is removed when the ledger is dropped, which covers normal
//! completion, early returns, and a cancelled future on Ctrl-C.

use std::fs;
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, SweepError};

/// Ordered issue numbers for a single run, backed by a temp file
pub struct RunLedger {
    file: NamedTempFile,
    len: usize,
}

impl RunLedger {
    /// Create an empty ledger in the system temp directory
    pub fn create() -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("ghsweep-")
            .suffix(".ledger")
            .tempfile()?;
        tracing::debug!(path = %file.path().display(), "created run ledger");
        Ok(Self { file, len: 0 })
    }

    /// Write the issue numbers, replacing anything recorded earlier
    pub fn record<I>(&mut self, numbers: I) -> Result<usize>
    where
        I: IntoIterator<Item = u64>,
    {
        let handle = self.file.as_file_mut();
        handle.set_len(0)?;
        handle.seek(SeekFrom::Start(0))?;

        let mut count = 0;
        for number in numbers {
            writeln!(handle, "{}", number)?;
            count += 1;
        }
        handle.flush()?;

        self.len = count;
        Ok(count)
    }

    /// Read the issue numbers back in the order they were written
    pub fn numbers(&self) -> Result<Vec<u64>> {
        let reader = BufReader::new(fs::File::open(self.file.path())?);
        let mut numbers = Vec::with_capacity(self.len);

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let number = trimmed.parse::<u64>().map_err(|_| {
                SweepError::InvalidInput(format!("Corrupt ledger entry '{}'", trimmed))
            })?;
            numbers.push(number);
        }

        Ok(numbers)
    }

    /// Number of entries recorded
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
