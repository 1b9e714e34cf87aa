use claim::{assert_err, assert_ok};
use theme_toggle::configuration::LogLevel;
use theme_toggle::{Theme, ThemeConfig, ThemeError};

#[test]
fn default_config_matches_page_conventions() {
    let config = ThemeConfig::default();

    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.toggle_id, "dark-mode-toggle");
    assert_eq!(config.default_theme, Theme::Light);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn every_field_can_be_overridden() {
    let config = assert_ok!(ThemeConfig::from_json(
        r#"{
            "storage_key": "todo-theme",
            "attribute": "data-color-scheme",
            "toggle_id": "theme-switch",
            "default_theme": "dark",
            "log_level": "debug"
        }"#
    ));

    assert_eq!(config.storage_key, "todo-theme");
    assert_eq!(config.attribute, "data-color-scheme");
    assert_eq!(config.toggle_id, "theme-switch");
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn partial_config_keeps_remaining_defaults() {
    let config = assert_ok!(ThemeConfig::from_json(r#"{ "toggle_id": "switch" }"#));

    assert_eq!(config.toggle_id, "switch");
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.default_theme, Theme::Light);
}

#[test]
fn unknown_default_theme_is_rejected() {
    let e = assert_err!(ThemeConfig::from_json(r#"{ "default_theme": "pastel" }"#));

    assert!(matches!(e, ThemeError::Config(_)));
}
