//! SQLite schema creation.
//!
//! Each category owns its own `publications_<category>` table; all eight share
//! one column layout.

use buscadis_catalog::Category;
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error creating {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Database schema version {found} is newer than supported version {expected}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist.
///
/// Idempotent; safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(BASE_SCHEMA_SQL)?;
    for category in Category::all() {
        conn.execute_batch(&publication_table_sql(category.collection()))?;
    }
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a publications database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SchemaError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        create_schema(&conn)?;
    } else if version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// DDL for one category table. `collection` always comes from the fixed
/// category table, never from record data.
fn publication_table_sql(collection: &str) -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS {collection} (
    id TEXT PRIMARY KEY,
    short_id TEXT NOT NULL,
    slug TEXT NOT NULL,
    url_path TEXT NOT NULL,
    category TEXT NOT NULL,
    subcategory TEXT,
    subsubcategory TEXT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    price REAL NOT NULL DEFAULT 0,
    currency TEXT NOT NULL,
    city TEXT NOT NULL,
    district TEXT NOT NULL,
    address TEXT,
    reference_point TEXT,
    contact_name TEXT NOT NULL,
    contact_phone TEXT NOT NULL,
    contact_whatsapp TEXT NOT NULL,
    contact_email TEXT NOT NULL,
    features TEXT NOT NULL DEFAULT '{{}}',
    images TEXT NOT NULL DEFAULT '[]',
    status TEXT NOT NULL,
    user_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    document TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_{collection}_short_id ON {collection}(short_id);
CREATE INDEX IF NOT EXISTS idx_{collection}_subcategory ON {collection}(subcategory);
"#
    )
}

const BASE_SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- One row per non-dry-run import
CREATE TABLE IF NOT EXISTS import_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    source_path TEXT NOT NULL,
    files INTEGER NOT NULL,
    total INTEGER NOT NULL,
    success INTEGER NOT NULL,
    skipped INTEGER NOT NULL,
    errors INTEGER NOT NULL,
    imported_at TEXT NOT NULL
);
"#;
