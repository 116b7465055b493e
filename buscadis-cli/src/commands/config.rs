use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use buscadis_catalog::settings_path;

use crate::error::CliError;

/// Show the effective settings and where they came from.
pub(crate) fn run_config_show(settings_override: Option<&Path>) -> Result<(), CliError> {
    let path = settings_override
        .map(Path::to_path_buf)
        .unwrap_or_else(settings_path);
    let settings = super::load_settings(settings_override)?;

    log::info!(
        "{}",
        "Import Settings".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("");
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!(
        "  Database:      {}",
        settings
            .database_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    let rendered = settings
        .to_toml_string()
        .map_err(|e| CliError::config(e.to_string()))?;
    for line in rendered.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(settings_override: Option<&Path>) {
    let path = settings_override
        .map(Path::to_path_buf)
        .unwrap_or_else(settings_path);
    log::info!("{}", path.display());
}
