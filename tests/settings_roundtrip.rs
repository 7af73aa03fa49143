use stream_studio::settings::Settings;
use tempfile::tempdir;

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();

    let mut settings = Settings::default();
    settings.stream_url = "rtsp://example/stream".into();
    settings.volume = 80;
    settings.muted = true;
    settings.autoplay = true;
    settings.debug_logging = true;
    settings.save(path).unwrap();

    let loaded = Settings::load(path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");
    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded, Settings::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"volume": 25}"#).unwrap();

    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.volume, 25);
    assert!(loaded.overlay_enabled);
    assert!(!loaded.muted);
    assert!(loaded.stream_url.is_empty());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn volume_fraction_clamps_to_unit_range() {
    let mut settings = Settings::default();
    settings.volume = 50;
    assert_eq!(settings.volume_fraction(), 0.5);
    settings.volume = 250;
    assert_eq!(settings.volume_fraction(), 1.0);
}
