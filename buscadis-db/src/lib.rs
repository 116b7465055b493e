//! SQLite persistence layer for advertisement publications.
//!
//! Provides schema creation and the insert/query operations behind the
//! importer's sink, backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod schema;

pub use operations::{
    OperationError, count_publications, find_publication, insert_import_log, insert_publication,
    list_import_logs, list_short_ids,
};
pub use schema::{SchemaError, open_database, open_memory};
