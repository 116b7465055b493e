use buscadis_catalog::*;
use buscadis_db::*;
use serde_json::{Map, json};

fn test_publication(id: &str, short_id: &str, category: Category) -> CanonicalPublication {
    let mut features = Map::new();
    features.insert("rooms".to_string(), json!(3));
    CanonicalPublication {
        id: id.to_string(),
        short_id: short_id.to_string(),
        slug: "casa-en-san-blas".to_string(),
        url_path: format!("/{}/general/{}-casa-en-san-blas", category.name(), short_id),
        category,
        subcategory: None,
        subsubcategory: None,
        title: "Casa en San Blas".to_string(),
        description: "Amplia y soleada".to_string(),
        price: 1200.5,
        currency: "PEN".to_string(),
        location: Location {
            city: "Cusco".to_string(),
            district: "San Blas".to_string(),
            address: Some("Calle Tandapata 123".to_string()),
            reference_point: None,
        },
        contact: Contact {
            name: "Anunciante".to_string(),
            phone: "999999999".to_string(),
            whatsapp: "999999999".to_string(),
            email: "contacto@buscadis.com".to_string(),
        },
        features,
        images: vec!["1.jpg".to_string(), "2.jpg".to_string()],
        status: "active".to_string(),
        created_at: "2024-06-01T12:00:00+00:00".to_string(),
        updated_at: "2024-06-01T12:00:00+00:00".to_string(),
        user_id: "admin".to_string(),
        extra: Map::new(),
    }
}

#[test]
fn insert_and_find_publication() {
    let conn = open_memory().unwrap();
    let publication = test_publication("1234", "1234", Category::Inmuebles);
    insert_publication(&conn, &publication).unwrap();

    let found = find_publication(&conn, Category::Inmuebles, "1234")
        .unwrap()
        .unwrap();
    assert_eq!(found, publication);

    let city: String = conn
        .query_row(
            "SELECT city FROM publications_inmuebles WHERE id = '1234'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(city, "Cusco");
}

#[test]
fn publication_lands_in_its_category_table_only() {
    let conn = open_memory().unwrap();
    insert_publication(&conn, &test_publication("a1", "1111", Category::Empleos)).unwrap();

    assert_eq!(count_publications(&conn, Category::Empleos).unwrap(), 1);
    for &category in Category::all() {
        if category != Category::Empleos {
            assert_eq!(count_publications(&conn, category).unwrap(), 0);
        }
    }
    assert!(
        find_publication(&conn, Category::Productos, "a1")
            .unwrap()
            .is_none()
    );
}

#[test]
fn duplicate_id_is_rejected() {
    let conn = open_memory().unwrap();
    insert_publication(&conn, &test_publication("dup", "2001", Category::Eventos)).unwrap();
    let result = insert_publication(&conn, &test_publication("dup", "2002", Category::Eventos));
    assert!(result.is_err());
}

#[test]
fn duplicate_short_id_is_rejected() {
    let conn = open_memory().unwrap();
    insert_publication(&conn, &test_publication("x1", "3003", Category::Eventos)).unwrap();
    let result = insert_publication(&conn, &test_publication("x2", "3003", Category::Eventos));
    assert!(result.is_err());
}

#[test]
fn short_id_listing_spans_all_tables() {
    let conn = open_memory().unwrap();
    assert!(list_short_ids(&conn).unwrap().is_empty());

    insert_publication(&conn, &test_publication("n1", "4444", Category::Negocios)).unwrap();
    insert_publication(&conn, &test_publication("e1", "5555", Category::Empleos)).unwrap();

    let mut ids = list_short_ids(&conn).unwrap();
    ids.sort();
    assert_eq!(ids, vec!["4444", "5555"]);
}

#[test]
fn import_logs_round_trip_newest_first() {
    let conn = open_memory().unwrap();
    for (i, source) in ["first", "second"].iter().enumerate() {
        let log = ImportLog {
            id: 0,
            source_path: source.to_string(),
            files: 1,
            total: 3 + i as i64,
            success: 2,
            skipped: 1,
            errors: 1,
            imported_at: "2024-06-01T12:00:00+00:00".to_string(),
        };
        insert_import_log(&conn, &log).unwrap();
    }

    let logs = list_import_logs(&conn, 10).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].source_path, "second");
    assert_eq!(logs[0].total, 4);
    assert_eq!(logs[1].source_path, "first");
}
