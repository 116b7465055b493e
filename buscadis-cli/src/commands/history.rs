use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use buscadis_catalog::ImportSettings;

use crate::error::CliError;

/// Show the most recent entries from the import log.
pub(crate) fn run_history(
    settings: &ImportSettings,
    db: Option<PathBuf>,
    limit: u32,
) -> Result<(), CliError> {
    let db_path = super::resolve_db_path(db, settings);
    if !db_path.exists() {
        log::info!(
            "No database at {}",
            db_path.display().if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    let conn = buscadis_db::open_database(&db_path).map_err(|e| {
        CliError::database(format!("failed to open {}: {}", db_path.display(), e))
    })?;
    let logs = buscadis_db::list_import_logs(&conn, limit)
        .map_err(|e| CliError::database(e.to_string()))?;

    if logs.is_empty() {
        log::info!(
            "{}",
            "No imports recorded yet.".if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    for entry in &logs {
        let status = if entry.errors == 0 {
            "\u{2714}".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()).to_string()
        };
        log::info!(
            "{} {} {}",
            status,
            entry.imported_at.if_supports_color(Stdout, |t| t.dimmed()),
            entry.source_path,
        );
        log::info!(
            "    {} file(s), {} record(s): {} imported, {} skipped, {} error(s)",
            entry.files,
            entry.total,
            entry.success,
            entry.skipped,
            entry.errors,
        );
    }
    Ok(())
}
