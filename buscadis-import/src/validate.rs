//! Field validation.
//!
//! [`validate_record`] checks required fields, the category taxonomy and the
//! price, and applies the importer's fallbacks in place: legacy aliases, the
//! legacy `contact.phones` shape, and placeholder contact/location values.

use buscadis_catalog::{Category, RawRecord, RecordDefaults};
use serde_json::{Map, Value, json};

use crate::error::ValidationError;
use crate::migrate::{apply_legacy_aliases, is_absent, present};

/// Fields every record must carry as non-empty text.
pub const REQUIRED_FIELDS: &[&str] = &["title", "description"];

/// Validate one raw record, mutating it to apply fallbacks.
///
/// Returns the record's category on success.
pub fn validate_record(
    record: &mut RawRecord,
    defaults: &RecordDefaults,
) -> Result<Category, ValidationError> {
    // categorySlug, subcategorySlug, subSubcategorySlug, amount, attributes
    apply_legacy_aliases(record);

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| present(record, field).is_none())
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let category = check_category(record)?;

    default_contact(record, defaults);
    default_location(record, defaults);

    if let Some(price) = present(record, "price") {
        if parse_price(price).is_none() {
            return Err(ValidationError::InvalidPrice(value_text(price)));
        }
    }

    Ok(category)
}

fn check_category(record: &RawRecord) -> Result<Category, ValidationError> {
    let value = match present(record, "category") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    value
        .parse::<Category>()
        .map_err(|_| ValidationError::InvalidCategory { value })
}

/// Collapse the legacy `contact.phones` list, or synthesize a placeholder
/// contact when none was supplied.
fn default_contact(record: &mut RawRecord, defaults: &RecordDefaults) {
    let placeholder = &defaults.contact;
    match record.get_mut("contact") {
        Some(Value::Object(contact)) if contact.contains_key("phones") => {
            let first_phone = contact
                .get("phones")
                .and_then(Value::as_array)
                .and_then(|phones| phones.first())
                .filter(|v| !is_absent(v))
                .map(value_text)
                .unwrap_or_default();
            let name = text_or(contact, "name", &placeholder.name);
            let email = text_or(contact, "email", &placeholder.email);
            *contact = collapsed_contact(name, first_phone, email);
        }
        Some(Value::Object(_)) => {}
        Some(existing) if !existing.is_null() => {}
        _ => {
            record.insert(
                "contact".to_string(),
                json!({
                    "name": placeholder.name,
                    "phone": placeholder.phone,
                    "whatsapp": placeholder.whatsapp,
                    "email": placeholder.email,
                }),
            );
        }
    }
}

fn collapsed_contact(name: String, phone: String, email: String) -> Map<String, Value> {
    let mut contact = Map::new();
    contact.insert("name".to_string(), Value::String(name));
    contact.insert("phone".to_string(), Value::String(phone.clone()));
    contact.insert("whatsapp".to_string(), Value::String(phone));
    contact.insert("email".to_string(), Value::String(email));
    contact
}

/// Synthesize the default region when no location (or no city) was supplied.
fn default_location(record: &mut RawRecord, defaults: &RecordDefaults) {
    match record.get_mut("location") {
        Some(Value::Object(location)) => {
            if location.get("city").is_none_or(is_absent) {
                location.insert("city".to_string(), Value::String(defaults.city.clone()));
            }
        }
        Some(existing) if !existing.is_null() => {}
        _ => {
            record.insert(
                "location".to_string(),
                json!({ "city": defaults.city, "district": defaults.district }),
            );
        }
    }
}

/// Parse a price given as a JSON number or numeric string. `None` if it is
/// not a finite number >= 0.
pub(crate) fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (price.is_finite() && price >= 0.0).then_some(price)
}

/// Strings verbatim, everything else in its JSON form.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_or(map: &Map<String, Value>, key: &str, fallback: &str) -> String {
    map.get(key)
        .filter(|v| !is_absent(v))
        .map(value_text)
        .unwrap_or_else(|| fallback.to_string())
}
