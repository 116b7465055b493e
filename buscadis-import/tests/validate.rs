use buscadis_catalog::*;
use buscadis_import::*;
use serde_json::{Value, json};

fn raw(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn valid_record() -> RawRecord {
    raw(json!({
        "title": "Vendo bicicleta",
        "description": "Aro 26, poco uso",
        "category": "productos",
    }))
}

#[test]
fn accepts_minimal_record() {
    let mut record = valid_record();
    let category = validate_record(&mut record, &RecordDefaults::default()).unwrap();
    assert_eq!(category, Category::Productos);
}

#[test]
fn missing_required_fields_are_named() {
    let mut record = raw(json!({"category": "productos", "description": "   "}));
    let err = validate_record(&mut record, &RecordDefaults::default()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingFields(vec!["title".to_string(), "description".to_string()])
    );
    let message = err.to_string();
    assert!(message.contains("title"));
    assert!(message.contains("description"));
}

#[test]
fn unknown_category_lists_every_valid_name() {
    let mut record = valid_record();
    record.insert("category".to_string(), json!("mascotas"));
    let err = validate_record(&mut record, &RecordDefaults::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("mascotas"));
    for category in Category::all() {
        assert!(message.contains(category.name()), "missing {category}");
    }
}

#[test]
fn missing_category_is_invalid() {
    let mut record = valid_record();
    record.remove("category");
    let err = validate_record(&mut record, &RecordDefaults::default()).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidCategory { .. }));
}

#[test]
fn category_slug_is_used_when_category_absent() {
    let mut record = valid_record();
    record.remove("category");
    record.insert("categorySlug".to_string(), json!("vehiculos"));
    record.insert("subcategorySlug".to_string(), json!("motos"));
    let category = validate_record(&mut record, &RecordDefaults::default()).unwrap();
    assert_eq!(category, Category::Vehiculos);
    assert_eq!(record["category"], "vehiculos");
    assert_eq!(record["subcategory"], "motos");
    assert!(!record.contains_key("categorySlug"));
}

#[test]
fn negative_price_is_rejected_with_value() {
    let mut record = valid_record();
    record.insert("price".to_string(), json!(-5));
    let err = validate_record(&mut record, &RecordDefaults::default()).unwrap_err();
    assert_eq!(err, ValidationError::InvalidPrice("-5".to_string()));
    assert!(err.to_string().contains("-5"));
}

#[test]
fn price_may_be_numeric_text() {
    let mut record = valid_record();
    record.insert("price".to_string(), json!("150.50"));
    assert!(validate_record(&mut record, &RecordDefaults::default()).is_ok());

    let mut record = valid_record();
    record.insert("price".to_string(), json!("barato"));
    let err = validate_record(&mut record, &RecordDefaults::default()).unwrap_err();
    assert!(err.to_string().contains("barato"));
}

#[test]
fn legacy_amount_is_checked_as_price() {
    let mut record = valid_record();
    record.insert("amount".to_string(), json!(-1));
    let err = validate_record(&mut record, &RecordDefaults::default()).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidPrice(_)));
}

#[test]
fn absent_contact_gets_placeholder() {
    let mut record = valid_record();
    validate_record(&mut record, &RecordDefaults::default()).unwrap();
    assert_eq!(
        record["contact"],
        json!({
            "name": "Anunciante",
            "phone": "999999999",
            "whatsapp": "999999999",
            "email": "contacto@buscadis.com",
        })
    );
}

#[test]
fn legacy_phone_list_is_collapsed() {
    let mut record = valid_record();
    record.insert(
        "contact".to_string(),
        json!({"name": "Julio", "phones": ["984123456", "984000000"]}),
    );
    validate_record(&mut record, &RecordDefaults::default()).unwrap();
    assert_eq!(
        record["contact"],
        json!({
            "name": "Julio",
            "phone": "984123456",
            "whatsapp": "984123456",
            "email": "contacto@buscadis.com",
        })
    );
}

#[test]
fn empty_legacy_phone_list_leaves_blank_numbers() {
    let mut record = valid_record();
    record.insert("contact".to_string(), json!({"phones": [], "email": "a@b.pe"}));
    validate_record(&mut record, &RecordDefaults::default()).unwrap();
    assert_eq!(record["contact"]["name"], "Anunciante");
    assert_eq!(record["contact"]["phone"], "");
    assert_eq!(record["contact"]["whatsapp"], "");
    assert_eq!(record["contact"]["email"], "a@b.pe");
}

#[test]
fn null_first_legacy_phone_becomes_blank() {
    let mut record = valid_record();
    record.insert("contact".to_string(), json!({"phones": [null, "984000000"]}));
    validate_record(&mut record, &RecordDefaults::default()).unwrap();
    assert_eq!(record["contact"]["phone"], "");
    assert_eq!(record["contact"]["whatsapp"], "");
}

#[test]
fn absent_location_gets_default_region() {
    let mut record = valid_record();
    validate_record(&mut record, &RecordDefaults::default()).unwrap();
    assert_eq!(record["location"], json!({"city": "Cusco", "district": "Cusco"}));
}

#[test]
fn district_only_location_gets_default_city() {
    let mut record = valid_record();
    record.insert("location".to_string(), json!({"district": "Santiago"}));
    validate_record(&mut record, &RecordDefaults::default()).unwrap();
    assert_eq!(record["location"], json!({"city": "Cusco", "district": "Santiago"}));
}

#[test]
fn default_region_is_configurable() {
    let mut settings = ImportSettings::default();
    settings.set_default_region("Arequipa");
    let mut record = valid_record();
    validate_record(&mut record, &settings.defaults).unwrap();
    assert_eq!(
        record["location"],
        json!({"city": "Arequipa", "district": "Arequipa"})
    );
}

#[test]
fn passing_records_always_carry_a_known_category() {
    let inputs = [
        json!({"title": "a", "description": "b", "category": "empleos"}),
        json!({"title": "a", "description": "b", "categorySlug": "comunidad"}),
        json!({"title": "a", "description": "b", "category": "Empleos"}),
        json!({"title": "a", "description": "b", "category": 3}),
        json!({"title": "a", "description": "b", "category": "", "categorySlug": "eventos"}),
    ];
    for input in inputs {
        let mut record = raw(input);
        if validate_record(&mut record, &RecordDefaults::default()).is_ok() {
            let name = record["category"].as_str().unwrap();
            assert!(Category::all().iter().any(|c| c.name() == name));
        }
    }
}
