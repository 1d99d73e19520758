use super::*;
use crate::kernel::services::ports::ItemSettings;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_settings(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn load_settings_fills_missing_fields_with_defaults() {
    let file = write_settings(r#"{ "default_columns": 4, "autoplay": false }"#);
    let settings = load_settings(file.path()).unwrap();

    assert_eq!(settings.default_columns, 4);
    assert!(!settings.autoplay);
    assert_eq!(settings.autoplay_interval_ms, 5000);
    assert_eq!(settings.items.len(), Settings::default().items.len());
}

#[test]
fn load_settings_reads_items() {
    let file = write_settings(
        r#"{ "items": [ { "title": "Wat Pho", "subtitle": "Bangkok" }, { "title": "Wat Rong Khun" } ] }"#,
    );
    let settings = load_settings(file.path()).unwrap();

    assert_eq!(settings.items.len(), 2);
    assert_eq!(settings.items[0].subtitle.as_deref(), Some("Bangkok"));
    assert_eq!(settings.items[1].subtitle, None);
}

#[test]
fn load_settings_reports_parse_errors() {
    let file = write_settings("{ not json");
    let err = load_settings(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("invalid settings"));
}

#[test]
fn load_settings_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}

#[test]
fn resolve_settings_falls_back_when_explicit_file_is_broken() {
    let file = write_settings("[]");
    assert_eq!(resolve_settings(Some(file.path())), Settings::default());
}

#[test]
fn resolve_settings_prefers_explicit_file() {
    let file = write_settings(r#"{ "default_columns": 2 }"#);
    assert_eq!(resolve_settings(Some(file.path())).default_columns, 2);
}

#[test]
fn carousel_options_maps_valid_settings() {
    let settings = Settings {
        default_columns: 2,
        autoplay: false,
        autoplay_interval_ms: 2500,
        exact_item_width: true,
        ..Settings::default()
    };
    let options = carousel_options(&settings);

    assert_eq!(options.layout, ColumnLayout::Two);
    assert!(!options.autoplay);
    assert_eq!(options.autoplay_interval, Duration::from_millis(2500));
    assert_eq!(options.rounding, WidthRounding::Exact);
}

#[test]
fn carousel_options_replaces_out_of_range_values() {
    let settings = Settings {
        default_columns: 7,
        autoplay_interval_ms: 0,
        ..Settings::default()
    };
    let options = carousel_options(&settings);

    assert_eq!(options.layout, ColumnLayout::Three);
    assert_eq!(
        options.autoplay_interval,
        Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
    );
    assert_eq!(options.rounding, WidthRounding::Legacy);
}

#[test]
fn invalid_field_falls_back_alone() {
    let file = write_settings(
        r#"{ "default_columns": 300, "autoplay": "yes", "autoplay_interval_ms": 1500, "items": [ { "title": "Wat Pho" } ] }"#,
    );
    let settings = load_settings(file.path()).unwrap();

    assert_eq!(settings.default_columns, 3);
    assert!(settings.autoplay);
    assert_eq!(settings.autoplay_interval_ms, 1500);
    assert_eq!(settings.items, vec![ItemSettings::new("Wat Pho", None)]);
}

#[test]
fn invalid_item_list_keeps_other_fields() {
    let file = write_settings(r#"{ "default_columns": 2, "items": [ { "subtitle": "no title" } ] }"#);
    let settings = load_settings(file.path()).unwrap();

    assert_eq!(settings.default_columns, 2);
    assert_eq!(settings.items, Settings::default().items);
}
