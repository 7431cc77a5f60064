//! Counters collected during one copy invocation

/// Copy statistics for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Regular files written.
    pub files_copied: u64,
    /// Destination directories written into, whether new or already there.
    pub directories: u64,
    /// Aggregate bytes written.
    pub bytes_copied: u64,
    /// Directory children skipped with a warning or an error.
    pub skipped: u64,
}

impl CopyStats {
    pub(crate) fn record_file(&mut self, bytes: u64) {
        self.files_copied += 1;
        self.bytes_copied += bytes;
    }
}
