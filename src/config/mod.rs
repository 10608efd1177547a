// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to a `settings.toml`
//! file.
//!
//! Besides user preferences (language, theme), the config carries the
//! contact-form endpoint. The endpoint is validated once at startup via
//! [`ContactConfig::resolve`] so a broken URL surfaces immediately instead
//! of failing on the first submission.
//!
//! # Examples
//!
//! ```no_run
//! use heatpro_profile::config::{self, Config};
//!
//! let mut config = config::load(None);
//! config.language = Some("en-US".to_string());
//! config::save(&config, None).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "HeatPro";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "HEATPRO_CONFIG_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `id`, `en-US`).
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: crate::ui::theming::ThemeMode,
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Contact-form target, mirroring what the hosted form service expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Absolute http(s) URL of the form-processing endpoint.
    pub endpoint: Option<String>,
    /// HTTP method for submissions. Defaults to POST.
    pub method: Option<String>,
}

/// A validated submission target.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub url: Url,
    pub method: reqwest::Method,
}

impl ContactConfig {
    /// Validates the configured endpoint.
    ///
    /// Returns `Ok(None)` when no endpoint is configured, `Err` when the
    /// configured value cannot be used (bad URL, non-http scheme, unknown
    /// method).
    pub fn resolve(&self) -> Result<Option<Endpoint>> {
        let Some(raw) = self.endpoint.as_deref() else {
            return Ok(None);
        };

        let url = Url::parse(raw)
            .map_err(|e| Error::Config(format!("invalid contact endpoint '{raw}': {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::Config(format!(
                "contact endpoint must be http(s), got '{}'",
                url.scheme()
            )));
        }

        let method = match self.method.as_deref() {
            None => reqwest::Method::POST,
            Some(raw_method) => {
                reqwest::Method::from_bytes(raw_method.to_uppercase().as_bytes()).map_err(
                    |_| Error::Config(format!("invalid contact method '{raw_method}'")),
                )?
            }
        };

        Ok(Some(Endpoint { url, method }))
    }
}

/// Resolution order: explicit override, `HEATPRO_CONFIG_DIR`, platform dir.
fn config_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Loads the configuration, falling back to defaults when the file does not
/// exist or cannot be read.
pub fn load(override_dir: Option<&Path>) -> Config {
    if let Some(dir) = config_dir(override_dir) {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            return load_from_path(&path).unwrap_or_default();
        }
    }
    Config::default()
}

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config, override_dir: Option<&Path>) -> Result<()> {
    if let Some(dir) = config_dir(override_dir) {
        return save_to_path(config, &dir.join(CONFIG_FILE));
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("en-US".to_string()),
            contact: ContactConfig {
                endpoint: Some("https://formspree.io/f/abcd1234".to_string()),
                method: Some("post".to_string()),
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.contact.endpoint, config.contact.endpoint);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn resolve_accepts_https_endpoint_and_defaults_to_post() {
        let contact = ContactConfig {
            endpoint: Some("https://formspree.io/f/abcd1234".to_string()),
            method: None,
        };
        let endpoint = contact.resolve().expect("should resolve").expect("some");
        assert_eq!(endpoint.method, reqwest::Method::POST);
        assert_eq!(endpoint.url.host_str(), Some("formspree.io"));
    }

    #[test]
    fn resolve_rejects_non_http_scheme() {
        let contact = ContactConfig {
            endpoint: Some("ftp://example.com/form".to_string()),
            method: None,
        };
        assert!(contact.resolve().is_err());
    }

    #[test]
    fn resolve_rejects_malformed_url() {
        let contact = ContactConfig {
            endpoint: Some("not a url".to_string()),
            method: None,
        };
        assert!(contact.resolve().is_err());
    }

    #[test]
    fn resolve_without_endpoint_is_none() {
        assert!(ContactConfig::default()
            .resolve()
            .expect("no endpoint is not an error")
            .is_none());
    }
}
