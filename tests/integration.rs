// SPDX-License-Identifier: MPL-2.0
use heatpro_profile::config::{self, Config, ContactConfig};
use heatpro_profile::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: default locale (Indonesian)
    let initial_config = Config::default();
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_default = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_default.current_locale().to_string(), "id");

    // 2. Change config to en-US
    let english_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&english_config, &temp_config_file_path)
        .expect("Failed to write english config file");

    let loaded_english_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load english config from path");
    let i18n_en = I18n::new(None, &loaded_english_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_lang_overrides_config() {
    let config = Config {
        language: Some("id".to_string()),
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_validation_messages_match_both_locales() {
    let mut i18n = I18n::default();

    i18n.set_locale("id".parse().unwrap());
    assert_eq!(i18n.tr("form-error-required"), "Field ini harus diisi.");
    assert_eq!(i18n.tr("form-error-email"), "Format email tidak valid.");
    assert_eq!(
        i18n.tr("form-error-phone"),
        "Format nomor telepon tidak valid."
    );

    i18n.set_locale("en-US".parse().unwrap());
    assert_eq!(i18n.tr("form-error-required"), "This field is required.");
}

#[test]
fn test_contact_endpoint_round_trip_and_validation() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        contact: ContactConfig {
            endpoint: Some("https://formspree.io/f/abcd1234".to_string()),
            method: Some("POST".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    let endpoint = loaded
        .contact
        .resolve()
        .expect("endpoint should validate")
        .expect("endpoint should be present");
    assert_eq!(endpoint.url.as_str(), "https://formspree.io/f/abcd1234");
    assert_eq!(endpoint.method, reqwest::Method::POST);
}

#[test]
fn test_invalid_endpoint_fails_at_resolution_not_at_use() {
    let contact = ContactConfig {
        endpoint: Some("definitely not a url".to_string()),
        method: None,
    };
    // The error surfaces from resolve(), before any submission exists.
    assert!(contact.resolve().is_err());
}
