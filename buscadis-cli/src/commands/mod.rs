pub(crate) mod categories;
pub(crate) mod classify;
pub(crate) mod config;
pub(crate) mod history;
pub(crate) mod import;

use std::path::{Path, PathBuf};

use buscadis_catalog::ImportSettings;

use crate::error::CliError;

/// Load settings from `--settings` if given, else from the user config dir.
pub(crate) fn load_settings(path: Option<&Path>) -> Result<ImportSettings, CliError> {
    let settings = match path {
        Some(p) => ImportSettings::load_from(p)?,
        None => ImportSettings::load()?,
    };
    Ok(settings)
}

/// `--db` wins over the settings file, which wins over the data dir default.
pub(crate) fn resolve_db_path(db: Option<PathBuf>, settings: &ImportSettings) -> PathBuf {
    db.unwrap_or_else(|| settings.database_path())
}
