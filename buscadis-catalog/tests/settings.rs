use buscadis_catalog::ImportSettings;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = ImportSettings::load_from(&tmp.path().join("settings.toml")).unwrap();
    assert_eq!(settings, ImportSettings::default());
    assert_eq!(settings.defaults.city, "Cusco");
    assert_eq!(settings.defaults.district, "Cusco");
    assert_eq!(settings.defaults.currency, "PEN");
    assert_eq!(settings.defaults.contact.email, "contacto@buscadis.com");
    assert_eq!(settings.ids.short_id_digits, 4);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[defaults]
city = "Arequipa"

[defaults.contact]
phone = "984000000"

[database]
path = "/var/lib/buscadis/ads.db"
"#,
    )
    .unwrap();

    let settings = ImportSettings::load_from(&path).unwrap();
    assert_eq!(settings.defaults.city, "Arequipa");
    assert_eq!(settings.defaults.district, "Cusco");
    assert_eq!(settings.defaults.contact.phone, "984000000");
    assert_eq!(settings.defaults.contact.name, "Anunciante");
    assert_eq!(settings.defaults.user_id, "admin");
    assert_eq!(
        settings.database_path(),
        Path::new("/var/lib/buscadis/ads.db")
    );
}

#[test]
fn malformed_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "[defaults\ncity = ").unwrap();

    let err = ImportSettings::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("settings.toml"));
}

#[test]
fn set_default_region_moves_city_and_district() {
    let mut settings = ImportSettings::default();
    settings.set_default_region("Lima");
    assert_eq!(settings.defaults.city, "Lima");
    assert_eq!(settings.defaults.district, "Lima");
}

#[test]
fn rendered_settings_parse_back() {
    let mut settings = ImportSettings::default();
    settings.set_default_region("Puno");
    let text = settings.to_toml_string().unwrap();
    let parsed = ImportSettings::from_toml(&text, Path::new("inline")).unwrap();
    assert_eq!(parsed, settings);
}
