//! Record normalization: validated raw record → [`CanonicalPublication`].
//!
//! Normalization performs no I/O. Apart from short-id randomness and the
//! default timestamp it is deterministic.

use buscadis_catalog::{
    CanonicalPublication, Category, Contact, ImportSettings, Location, RawRecord, RecordDefaults,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::error::NormalizeError;
use crate::ids::ShortIdGenerator;
use crate::migrate::{apply_legacy_aliases, is_absent};
use crate::slug::{slugify, url_path};
use crate::validate::{parse_price, value_text};

/// Canonical keys consumed by assembly. Whatever else remains is carried in
/// [`CanonicalPublication::extra`].
const CANONICAL_KEYS: &[&str] = &[
    "id",
    "shortId",
    "slug",
    "urlPath",
    "category",
    "subcategory",
    "subsubcategory",
    "title",
    "description",
    "price",
    "currency",
    "location",
    "contact",
    "features",
    "images",
    "status",
    "created_at",
    "updated_at",
    "user_id",
];

/// Everything normalization needs besides the record itself.
pub struct NormalizeContext {
    pub defaults: RecordDefaults,
    pub ids: ShortIdGenerator,
    fixed_time: Option<DateTime<Utc>>,
}

impl NormalizeContext {
    pub fn new(defaults: RecordDefaults, ids: ShortIdGenerator) -> Self {
        Self {
            defaults,
            ids,
            fixed_time: None,
        }
    }

    /// Context with defaults and an entropy-seeded id generator from `settings`.
    pub fn from_settings(settings: &ImportSettings) -> Self {
        Self::new(
            settings.defaults.clone(),
            ShortIdGenerator::new(&settings.ids),
        )
    }

    /// Pin the timestamp used for defaulted `created_at`/`updated_at`.
    pub fn with_fixed_time(mut self, time: DateTime<Utc>) -> Self {
        self.fixed_time = Some(time);
        self
    }

    fn timestamp(&self) -> String {
        self.fixed_time
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Build the canonical publication for a record that passed validation.
pub fn normalize_record(
    mut record: RawRecord,
    ctx: &mut NormalizeContext,
) -> Result<CanonicalPublication, NormalizeError> {
    apply_legacy_aliases(&mut record);

    let category_name =
        optional_text(&record, "category")?.ok_or(NormalizeError::MissingField("category"))?;
    let category: Category = category_name
        .parse()
        .map_err(|_| NormalizeError::UnknownCategory(category_name.clone()))?;
    let title = optional_text(&record, "title")?.ok_or(NormalizeError::MissingField("title"))?;
    let description = optional_text(&record, "description")?
        .ok_or(NormalizeError::MissingField("description"))?;
    let subcategory = optional_text(&record, "subcategory")?;
    let subsubcategory = optional_text(&record, "subsubcategory")?;

    let short_id = ctx.ids.next_id();
    let slug = slugify(&title);
    let url_path = url_path(
        category,
        subcategory.as_deref(),
        subsubcategory.as_deref(),
        &short_id,
        &slug,
    );

    let id = match record.get("id").filter(|v| !is_absent(v)) {
        Some(Value::String(s)) if !s.contains('_') => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => short_id.clone(),
    };
    if id != short_id {
        ctx.ids.reserve(&id);
    }

    let price = match record.get("price").filter(|v| !is_absent(v)) {
        Some(value) => {
            parse_price(value).ok_or_else(|| NormalizeError::InvalidPrice(value_text(value)))?
        }
        None => 0.0,
    };

    let defaults = &ctx.defaults;
    let currency = optional_text(&record, "currency")?.unwrap_or_else(|| defaults.currency.clone());
    let location = build_location(record.get("location"), defaults)?;
    let contact = build_contact(record.get("contact"), defaults)?;
    let features = match record.get("features") {
        Some(Value::Object(map)) => map.clone(),
        Some(Value::Null) | None => Map::new(),
        Some(_) => return Err(NormalizeError::wrong_type("features", "object")),
    };
    let images = build_images(record.get("images"))?;
    let status = optional_text(&record, "status")?.unwrap_or_else(|| defaults.status.clone());
    let user_id = optional_text(&record, "user_id")?.unwrap_or_else(|| defaults.user_id.clone());

    let now = ctx.timestamp();
    let created_at = optional_text(&record, "created_at")?.unwrap_or_else(|| now.clone());
    let updated_at = optional_text(&record, "updated_at")?.unwrap_or(now);

    for key in CANONICAL_KEYS {
        record.remove(*key);
    }

    Ok(CanonicalPublication {
        id,
        short_id,
        slug,
        url_path,
        category,
        subcategory,
        subsubcategory,
        title,
        description,
        price,
        currency,
        location,
        contact,
        features,
        images,
        status,
        created_at,
        updated_at,
        user_id,
        extra: record,
    })
}

/// A text field as supplied; `None` when absent, null or blank.
fn optional_text(record: &RawRecord, field: &'static str) -> Result<Option<String>, NormalizeError> {
    match record.get(field) {
        Some(value) if is_absent(value) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(NormalizeError::wrong_type(field, "string")),
        None => Ok(None),
    }
}

fn build_location(
    value: Option<&Value>,
    defaults: &RecordDefaults,
) -> Result<Location, NormalizeError> {
    let map = match value {
        Some(Value::Object(map)) => map,
        Some(Value::Null) | None => {
            return Ok(Location {
                city: defaults.city.clone(),
                district: defaults.district.clone(),
                address: None,
                reference_point: None,
            });
        }
        Some(_) => return Err(NormalizeError::wrong_type("location", "object")),
    };

    let city = nested_text(map, "city", "location.city")?.unwrap_or_else(|| defaults.city.clone());
    let district = nested_text(map, "district", "location.district")?.unwrap_or_else(|| city.clone());
    Ok(Location {
        city,
        district,
        address: nested_text(map, "address", "location.address")?,
        reference_point: nested_text(map, "referencePoint", "location.referencePoint")?,
    })
}

fn build_contact(value: Option<&Value>, defaults: &RecordDefaults) -> Result<Contact, NormalizeError> {
    let placeholder = &defaults.contact;
    let map = match value {
        Some(Value::Object(map)) => map,
        Some(Value::Null) | None => {
            return Ok(Contact {
                name: placeholder.name.clone(),
                phone: placeholder.phone.clone(),
                whatsapp: placeholder.whatsapp.clone(),
                email: placeholder.email.clone(),
            });
        }
        Some(_) => return Err(NormalizeError::wrong_type("contact", "object")),
    };

    let legacy_phone = map
        .get("phones")
        .and_then(Value::as_array)
        .and_then(|phones| phones.first())
        .filter(|v| !is_absent(v))
        .map(value_text);
    let phone = contact_number(map, "phone")?;
    let whatsapp = contact_number(map, "whatsapp")?;
    let usable = |n: &Option<String>| n.clone().filter(|s| !s.trim().is_empty());
    // Blank only wins when nothing else is usable (collapsed empty `phones`).
    let fallback = usable(&phone)
        .or_else(|| usable(&whatsapp))
        .or_else(|| legacy_phone.clone());

    Ok(Contact {
        name: nested_text(map, "name", "contact.name")?.unwrap_or_else(|| placeholder.name.clone()),
        phone: usable(&phone)
            .or_else(|| fallback.clone())
            .or_else(|| phone.clone())
            .unwrap_or_else(|| placeholder.phone.clone()),
        whatsapp: usable(&whatsapp)
            .or(fallback)
            .or(whatsapp)
            .unwrap_or_else(|| placeholder.whatsapp.clone()),
        email: nested_text(map, "email", "contact.email")?
            .unwrap_or_else(|| placeholder.email.clone()),
    })
}

/// Phone numbers arrive as strings or bare numbers. Blank strings are
/// returned as-is; the caller decides whether another number replaces them.
fn contact_number(map: &Map<String, Value>, key: &'static str) -> Result<Option<String>, NormalizeError> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(NormalizeError::wrong_type(key, "string")),
    }
}

fn nested_text(
    map: &Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<Option<String>, NormalizeError> {
    match map.get(key) {
        Some(value) if is_absent(value) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(NormalizeError::wrong_type(field, "string")),
        None => Ok(None),
    }
}

fn build_images(value: Option<&Value>) -> Result<Vec<String>, NormalizeError> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(NormalizeError::wrong_type("images", "array of strings")),
            })
            .collect(),
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(_) => Err(NormalizeError::wrong_type("images", "array of strings")),
    }
}
