//! Insert and lookup operations for publications and import logs.

use buscadis_catalog::{CanonicalPublication, Category, ImportLog};
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Publication Operations ──────────────────────────────────────────────────

/// Insert a publication into its category's table.
///
/// Plain insert: an existing row with the same `id` or `short_id` is a
/// constraint error, not an update.
pub fn insert_publication(
    conn: &Connection,
    publication: &CanonicalPublication,
) -> Result<(), OperationError> {
    let features = serde_json::to_string(&publication.features)?;
    let images = serde_json::to_string(&publication.images)?;
    let document = serde_json::to_string(publication)?;

    let sql = format!(
        "INSERT INTO {} (id, short_id, slug, url_path, category, subcategory, subsubcategory,
             title, description, price, currency, city, district, address, reference_point,
             contact_name, contact_phone, contact_whatsapp, contact_email, features, images,
             status, user_id, created_at, updated_at, document)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17,
             ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26)",
        publication.collection()
    );
    conn.execute(
        &sql,
        params![
            publication.id,
            publication.short_id,
            publication.slug,
            publication.url_path,
            publication.category.name(),
            publication.subcategory,
            publication.subsubcategory,
            publication.title,
            publication.description,
            publication.price,
            publication.currency,
            publication.location.city,
            publication.location.district,
            publication.location.address,
            publication.location.reference_point,
            publication.contact.name,
            publication.contact.phone,
            publication.contact.whatsapp,
            publication.contact.email,
            features,
            images,
            publication.status,
            publication.user_id,
            publication.created_at,
            publication.updated_at,
            document,
        ],
    )?;
    Ok(())
}

/// Find a publication by id within one category.
pub fn find_publication(
    conn: &Connection,
    category: Category,
    id: &str,
) -> Result<Option<CanonicalPublication>, OperationError> {
    let sql = format!(
        "SELECT document FROM {} WHERE id = ?1",
        category.collection()
    );
    let result = conn.query_row(&sql, params![id], |row| row.get::<_, String>(0));
    match result {
        Ok(document) => Ok(Some(serde_json::from_str(&document)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Number of stored publications in one category.
pub fn count_publications(conn: &Connection, category: Category) -> Result<i64, OperationError> {
    let sql = format!("SELECT COUNT(*) FROM {}", category.collection());
    let count = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count)
}

/// Every short id stored across all category tables.
pub fn list_short_ids(conn: &Connection) -> Result<Vec<String>, OperationError> {
    let mut ids = Vec::new();
    for category in Category::all() {
        let sql = format!("SELECT short_id FROM {}", category.collection());
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        for row in rows {
            ids.push(row?);
        }
    }
    Ok(ids)
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Record an import run. Returns the new row id.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_path, files, total, success, skipped, errors, imported_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            log.source_path,
            log.files,
            log.total,
            log.success,
            log.skipped,
            log.errors,
            log.imported_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// List import logs, most recent first.
pub fn list_import_logs(conn: &Connection, limit: u32) -> Result<Vec<ImportLog>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, source_path, files, total, success, skipped, errors, imported_at
         FROM import_log ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_path: row.get(1)?,
            files: row.get(2)?,
            total: row.get(3)?,
            success: row.get(4)?,
            skipped: row.get(5)?,
            errors: row.get(6)?,
            imported_at: row.get(7)?,
        })
    })?;
    let mut logs = Vec::new();
    for row in rows {
        logs.push(row?);
    }
    Ok(logs)
}
