use std::time::{SystemTime, UNIX_EPOCH};

use quickpick_core::config::{self, Config};

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be valid")
        .as_nanos()
}

#[test]
fn accepts_default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.chord, "Mod+K");
    assert_eq!(cfg.max_results, 20);
    assert!(cfg.history_db_path.to_string_lossy().contains("quickpick"));
    assert!(config::validate(&cfg).is_ok());
}

#[test]
fn rejects_max_results_out_of_range() {
    let cfg = Config {
        max_results: 200,
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());
}

#[test]
fn rejects_reserved_chords() {
    let cfg = Config {
        chord: "Mod+Q".to_string(),
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());
}

#[test]
fn save_and_load_round_trip() {
    let base = std::env::temp_dir().join(format!("quickpick-cfg-{}", unique_suffix()));
    let cfg = Config {
        chord: "Mod+P".to_string(),
        max_results: 30,
        catalog_dir: Some(base.join("catalog")),
        history_db_path: base.join("history.sqlite3"),
        config_path: base.join("config.toml"),
    };

    config::save(&cfg).expect("config should save");
    let loaded = config::load(Some(&cfg.config_path)).expect("config should load");

    assert_eq!(loaded, cfg);

    std::fs::remove_dir_all(&base).expect("temp config dir should be removed");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir()
        .join(format!("quickpick-cfg-missing-{}", unique_suffix()))
        .join("config.toml");

    let loaded = config::load(Some(&path)).expect("missing file should yield defaults");
    assert_eq!(loaded.chord, "Mod+K");
    assert_eq!(loaded.config_path, path);
}
