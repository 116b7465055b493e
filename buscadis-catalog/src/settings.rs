//! Import settings: deployment-specific defaults and the settings file location.
//!
//! The settings file lives at `~/.config/buscadis/settings.toml`. Every key is
//! optional; anything missing falls back to the built-in defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Values filled in when an upstream record omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordDefaults {
    /// Default region. Applied when a record has no location or no city.
    pub city: String,
    pub district: String,
    pub currency: String,
    pub status: String,
    pub user_id: String,
    pub contact: ContactDefaults,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            city: "Cusco".to_string(),
            district: "Cusco".to_string(),
            currency: "PEN".to_string(),
            status: "active".to_string(),
            user_id: "admin".to_string(),
            contact: ContactDefaults::default(),
        }
    }
}

/// Contact synthesized for records that carry none.
///
/// These are importer placeholders, not real contact data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDefaults {
    pub name: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
}

impl Default for ContactDefaults {
    fn default() -> Self {
        Self {
            name: "Anunciante".to_string(),
            phone: "999999999".to_string(),
            whatsapp: "999999999".to_string(),
            email: "contacto@buscadis.com".to_string(),
        }
    }
}

/// Short-id generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdSettings {
    /// Number of decimal digits in a freshly generated short id.
    pub short_id_digits: u32,
    /// Draws per width before the generator widens by one digit.
    pub max_attempts: u32,
}

impl Default for IdSettings {
    fn default() -> Self {
        Self {
            short_id_digits: 4,
            max_attempts: 32,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file. `None` means [`default_database_path`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Everything the importer needs from configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    pub defaults: RecordDefaults,
    pub ids: IdSettings,
    pub database: DatabaseSettings,
}

impl ImportSettings {
    /// Parse settings from TOML text.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, SettingsError> {
        toml::from_str(contents).map_err(|e| SettingsError::Parse {
            path: origin.display().to_string(),
            source: e,
        })
    }

    /// Load settings from `path`, or the built-in defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&contents, path)
    }

    /// Load settings from the canonical [`settings_path`].
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    /// Replace the default region. The district default follows the city.
    pub fn set_default_region(&mut self, city: &str) {
        self.defaults.city = city.to_string();
        self.defaults.district = city.to_string();
    }

    /// Resolve the database path: settings value, else [`default_database_path`].
    pub fn database_path(&self) -> PathBuf {
        self.database
            .path
            .clone()
            .unwrap_or_else(default_database_path)
    }

    /// Render the effective settings as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Canonical path to the settings file: `~/.config/buscadis/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("buscadis").join("settings.toml")
}

/// Default SQLite location: `<data dir>/buscadis/publications.db`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from(".cache"));
    data.join("buscadis").join("publications.db")
}
