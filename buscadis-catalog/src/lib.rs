//! Advertisement data model, category taxonomy, and import settings.
//!
//! This crate defines the canonical publication schema without any database
//! dependencies. Consumers can use these types directly for serialization,
//! display, or passing to `buscadis-db` for persistence.

pub mod category;
pub mod settings;
pub mod types;

pub use category::{Category, CategoryParseError};
pub use settings::{
    ContactDefaults, DatabaseSettings, IdSettings, ImportSettings, RecordDefaults,
    SettingsError, default_database_path, settings_path,
};
pub use types::*;
