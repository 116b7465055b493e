//! Data model types for advertisement publications.
//!
//! `RawRecord` is whatever an upstream producer handed us; `CanonicalPublication`
//! is the normalized shape the persistence layer stores.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::Category;

// ── Raw input ───────────────────────────────────────────────────────────────

/// An untyped advertisement record as supplied upstream.
///
/// May use current field names or legacy aliases (`categorySlug`, `amount`,
/// `attributes`, `contact.phones`, ...). Validity is decided by the validator.
pub type RawRecord = Map<String, Value>;

// ── Canonical publication ───────────────────────────────────────────────────

/// Where the advertised item or service is located.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub district: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_point: Option<String>,
}

/// How to reach the advertiser. All four fields are always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
}

/// A normalized, storage-ready advertisement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalPublication {
    pub id: String,
    #[serde(rename = "shortId")]
    pub short_id: String,
    pub slug: String,
    #[serde(rename = "urlPath")]
    pub url_path: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsubcategory: Option<String>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub location: Location,
    pub contact: Contact,
    #[serde(default)]
    pub features: Map<String, Value>,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
    /// Upstream fields with no canonical meaning, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CanonicalPublication {
    /// Storage collection this publication belongs in.
    pub fn collection(&self) -> &'static str {
        self.category.collection()
    }

    /// Serialize to the JSON document stored alongside the typed columns.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

// ── Import tracking ─────────────────────────────────────────────────────────

/// A record of one completed (non-dry-run) import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLog {
    pub id: i64,
    pub source_path: String,
    pub files: i64,
    pub total: i64,
    pub success: i64,
    pub skipped: i64,
    pub errors: i64,
    pub imported_at: String,
}
