use expense_core::config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_offers_business_and_personal() {
    let cfg = Config::default();

    assert_eq!(cfg.categories, vec!["Business", "Personal"]);
    assert_eq!(cfg.default_category, "Personal");
    assert_eq!(cfg.currency_symbol, "$");
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.categories.push("Travel".to_string());
    cfg.ui_color_enabled = false;
    cfg.storage_root = Some(dir.path().join("custom"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(
        loaded.resolve_storage_root(dir.path()),
        dir.path().join("custom")
    );
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    std::fs::write(manager.path(), "[not a config]").expect("write config");

    assert!(manager.load().is_err());
}
