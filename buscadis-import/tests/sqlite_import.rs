use std::fs;

use buscadis_catalog::*;
use buscadis_db::*;
use buscadis_import::*;
use tempfile::TempDir;

fn context() -> NormalizeContext {
    let settings = ImportSettings::default();
    NormalizeContext::new(
        settings.defaults.clone(),
        ShortIdGenerator::seeded(&settings.ids, 5),
    )
}

fn write_fixtures(dir: &TempDir) {
    fs::write(
        dir.path().join("inmuebles.json"),
        r#"[
            {"id": "casa-01", "title": "Vendo casa en Larapa", "description": "3 pisos",
             "categorySlug": "inmuebles", "subcategorySlug": "casas", "amount": 180000,
             "currency": "USD", "contact": {"name": "Luz", "phones": ["984000111"]}},
            {"title": "Cuarto para estudiante", "description": "Con baño propio",
             "category": "inmuebles", "location": {"district": "Wanchaq"}}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("evento.JSON"),
        r#"{"title": "Festival de la Chicha", "description": "Entrada libre", "category": "eventos"}"#,
    )
    .unwrap();
    fs::write(dir.path().join("README.md"), "not an input").unwrap();
}

#[test]
fn fs_source_lists_json_files_sorted() {
    let tmp = TempDir::new().unwrap();
    write_fixtures(&tmp);

    let plan = plan_import(&FsSource, tmp.path()).unwrap();
    let names: Vec<_> = plan
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["evento.JSON", "inmuebles.json"]);
}

#[test]
fn single_file_source_is_a_one_file_batch() {
    let tmp = TempDir::new().unwrap();
    write_fixtures(&tmp);

    let plan = plan_import(&FsSource, &tmp.path().join("inmuebles.json")).unwrap();
    assert_eq!(plan.files.len(), 1);
}

#[test]
fn import_writes_each_category_table() {
    let tmp = TempDir::new().unwrap();
    write_fixtures(&tmp);
    let conn = open_memory().unwrap();

    let plan = plan_import(&FsSource, tmp.path()).unwrap();
    let mut sink = SqliteSink::new(&conn);
    let result = Importer::new(&FsSource, context())
        .run(
            &plan,
            ImportOptions {
                dry_run: false,
                force: true,
            },
            &mut FixedAnswer(true),
            Some(&mut sink),
        )
        .unwrap();

    assert_eq!(result.total, 3);
    assert_eq!(result.success, 3);
    assert!(result.errors.is_empty());
    assert_eq!(sink.written(), 3);

    assert_eq!(count_publications(&conn, Category::Inmuebles).unwrap(), 2);
    assert_eq!(count_publications(&conn, Category::Eventos).unwrap(), 1);

    let casa = find_publication(&conn, Category::Inmuebles, "casa-01")
        .unwrap()
        .unwrap();
    assert_eq!(casa.price, 180000.0);
    assert_eq!(casa.currency, "USD");
    assert_eq!(casa.subcategory.as_deref(), Some("casas"));
    assert_eq!(casa.contact.phone, "984000111");
    assert_eq!(casa.contact.whatsapp, "984000111");
    assert_eq!(casa.contact.email, "contacto@buscadis.com");
    assert!(casa.url_path.starts_with("/inmuebles/casas/"));
    assert!(casa.url_path.ends_with("-vendo-casa-en-larapa"));

    let id = log_import(&conn, tmp.path(), plan.files.len(), &result).unwrap();
    let logs = list_import_logs(&conn, 1).unwrap();
    assert_eq!(logs[0].id, id);
    assert_eq!(logs[0].files, 2);
    assert_eq!(logs[0].success, 3);
}

#[test]
fn reimporting_caller_ids_reports_sink_errors() {
    let tmp = TempDir::new().unwrap();
    write_fixtures(&tmp);
    let conn = open_memory().unwrap();
    let plan = plan_import(&FsSource, tmp.path()).unwrap();
    let options = ImportOptions {
        dry_run: false,
        force: true,
    };

    let mut first = SqliteSink::new(&conn);
    let result = Importer::new(&FsSource, context())
        .run(&plan, options, &mut FixedAnswer(true), Some(&mut first))
        .unwrap();
    assert_eq!(result.success, 3);

    // Same seed, same short ids; "casa-01" is also already stored.
    let mut second = SqliteSink::new(&conn);
    let result = Importer::new(&FsSource, context())
        .run(&plan, options, &mut FixedAnswer(true), Some(&mut second))
        .unwrap();
    assert_eq!(result.total, 3);
    assert_eq!(result.success, 0);
    assert_eq!(result.skipped, 0);
    assert_eq!(result.errors_of(ErrorKind::Sink).count(), 3);
    assert_eq!(second.written(), 0);
    assert_eq!(count_publications(&conn, Category::Inmuebles).unwrap(), 2);
}

#[test]
fn reserving_stored_ids_avoids_cross_run_collisions() {
    let tmp = TempDir::new().unwrap();
    write_fixtures(&tmp);
    let conn = open_memory().unwrap();
    let plan = plan_import(&FsSource, tmp.path()).unwrap();
    let options = ImportOptions {
        dry_run: false,
        force: true,
    };

    let mut first = SqliteSink::new(&conn);
    Importer::new(&FsSource, context())
        .run(&plan, options, &mut FixedAnswer(true), Some(&mut first))
        .unwrap();

    let mut ctx = context();
    assert_eq!(reserve_stored_ids(&conn, &mut ctx.ids).unwrap(), 3);

    // Only the caller-supplied "casa-01" collides now.
    let mut second = SqliteSink::new(&conn);
    let result = Importer::new(&FsSource, ctx)
        .run(&plan, options, &mut FixedAnswer(true), Some(&mut second))
        .unwrap();
    assert_eq!(result.success, 2);
    let sink_errors: Vec<_> = result.errors_of(ErrorKind::Sink).collect();
    assert_eq!(sink_errors.len(), 1);
    assert_eq!(sink_errors[0].title.as_deref(), Some("Vendo casa en Larapa"));
    assert_eq!(count_publications(&conn, Category::Inmuebles).unwrap(), 3);
    assert_eq!(list_short_ids(&conn).unwrap().len(), 5);
}

#[test]
fn dry_run_leaves_database_empty() {
    let tmp = TempDir::new().unwrap();
    write_fixtures(&tmp);
    let conn = open_memory().unwrap();
    let plan = plan_import(&FsSource, tmp.path()).unwrap();

    let mut sink = SqliteSink::new(&conn);
    let result = Importer::new(&FsSource, context())
        .run(
            &plan,
            ImportOptions {
                dry_run: true,
                force: false,
            },
            &mut FixedAnswer(false),
            Some(&mut sink),
        )
        .unwrap();

    assert_eq!(result.success, 3);
    assert_eq!(sink.written(), 0);
    for &category in Category::all() {
        assert_eq!(count_publications(&conn, category).unwrap(), 0);
    }
}
