//! Persistence boundary.

use std::path::Path;

use buscadis_catalog::{CanonicalPublication, ImportLog};
use buscadis_db::operations::{self, OperationError};
use rusqlite::Connection;

use crate::batch::BatchResult;
use crate::error::SinkError;
use crate::ids::ShortIdGenerator;

/// Persists one canonical publication into its category collection.
pub trait PublicationSink {
    fn write(&mut self, publication: &CanonicalPublication) -> Result<(), SinkError>;
}

/// [`PublicationSink`] writing to the SQLite publication tables.
///
/// Each write is its own statement; a failure part-way through a file leaves
/// earlier rows in place.
pub struct SqliteSink<'a> {
    conn: &'a Connection,
    written: usize,
}

impl<'a> SqliteSink<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn, written: 0 }
    }

    /// Rows inserted through this sink.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl PublicationSink for SqliteSink<'_> {
    fn write(&mut self, publication: &CanonicalPublication) -> Result<(), SinkError> {
        operations::insert_publication(self.conn, publication)?;
        self.written += 1;
        Ok(())
    }
}

/// Record a finished import in the `import_log` table.
pub fn log_import(
    conn: &Connection,
    source: &Path,
    files: usize,
    result: &BatchResult,
) -> Result<i64, OperationError> {
    let entry = ImportLog {
        id: 0,
        source_path: source.display().to_string(),
        files: files as i64,
        total: result.total as i64,
        success: result.success as i64,
        skipped: result.skipped as i64,
        errors: result.errors.len() as i64,
        imported_at: chrono::Utc::now().to_rfc3339(),
    };
    operations::insert_import_log(conn, &entry)
}

/// Reserve every short id already stored so this run never draws one again.
/// Returns how many were reserved.
pub fn reserve_stored_ids(
    conn: &Connection,
    ids: &mut ShortIdGenerator,
) -> Result<usize, OperationError> {
    let stored = operations::list_short_ids(conn)?;
    for id in &stored {
        ids.reserve(id);
    }
    Ok(stored.len())
}
