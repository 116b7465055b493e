//! Legacy field aliases.
//!
//! Upstream producers have used several naming conventions over time. Every
//! accepted alias lives in [`LEGACY_ALIASES`]; applying the table is idempotent,
//! so both the validator and the normalizer may run it.

use buscadis_catalog::RawRecord;
use serde_json::Value;

/// How a legacy value is reconciled with its canonical counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasPolicy {
    /// Copy the legacy value only when the canonical field is absent.
    FillIfAbsent,
    /// Merge legacy object entries underneath the canonical object.
    /// Canonical entries win on key collision.
    MergeUnder,
}

/// One legacy → canonical field mapping.
#[derive(Debug, Clone, Copy)]
pub struct FieldAlias {
    pub legacy: &'static str,
    pub canonical: &'static str,
    pub policy: AliasPolicy,
}

/// Every legacy field name the importer accepts, in application order.
pub const LEGACY_ALIASES: &[FieldAlias] = &[
    FieldAlias {
        legacy: "categorySlug",
        canonical: "category",
        policy: AliasPolicy::FillIfAbsent,
    },
    FieldAlias {
        legacy: "subcategorySlug",
        canonical: "subcategory",
        policy: AliasPolicy::FillIfAbsent,
    },
    FieldAlias {
        legacy: "subSubcategorySlug",
        canonical: "subsubcategory",
        policy: AliasPolicy::FillIfAbsent,
    },
    FieldAlias {
        legacy: "amount",
        canonical: "price",
        policy: AliasPolicy::FillIfAbsent,
    },
    FieldAlias {
        legacy: "attributes",
        canonical: "features",
        policy: AliasPolicy::MergeUnder,
    },
];

/// Fold every legacy alias into its canonical field and drop the legacy key.
pub fn apply_legacy_aliases(record: &mut RawRecord) {
    for alias in LEGACY_ALIASES {
        let Some(legacy) = record.remove(alias.legacy) else {
            continue;
        };
        if is_absent(&legacy) {
            continue;
        }

        match alias.policy {
            AliasPolicy::FillIfAbsent => {
                if record.get(alias.canonical).is_none_or(is_absent) {
                    record.insert(alias.canonical.to_string(), legacy);
                }
            }
            AliasPolicy::MergeUnder => match record.get_mut(alias.canonical) {
                Some(Value::Object(canonical)) => {
                    if let Value::Object(legacy) = legacy {
                        for (key, value) in legacy {
                            canonical.entry(key).or_insert(value);
                        }
                    }
                }
                Some(existing) if !is_absent(existing) => {}
                _ => {
                    record.insert(alias.canonical.to_string(), legacy);
                }
            },
        }
    }
}

/// Null and empty strings count as "not supplied".
pub(crate) fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Field value if present and not [`is_absent`].
pub(crate) fn present<'a>(record: &'a RawRecord, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !is_absent(v))
}
