//! Import progress reporting.

use std::path::Path;

use crate::batch::{BatchResult, RecordError};

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called before each input file is read.
    fn on_file(&self, current: usize, total: usize, path: &Path);

    /// Called whenever a file or record is rejected.
    fn on_record_error(&self, error: &RecordError);

    /// Called once after the last file.
    fn on_complete(&self, result: &BatchResult);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_file(&self, _current: usize, _total: usize, _path: &Path) {}
    fn on_record_error(&self, _error: &RecordError) {}
    fn on_complete(&self, _result: &BatchResult) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_file(&self, current: usize, total: usize, path: &Path) {
        log::info!("[{}/{}] {}", current, total, path.display());
    }

    fn on_record_error(&self, error: &RecordError) {
        log::warn!("  {}", error);
    }

    fn on_complete(&self, result: &BatchResult) {
        log::info!(
            "Import finished: {} total, {} imported, {} skipped, {} errors",
            result.total,
            result.success,
            result.skipped,
            result.errors.len(),
        );
    }
}
