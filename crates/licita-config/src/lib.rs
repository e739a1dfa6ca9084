//! # licita-config
//!
//! Layered configuration loading for the LicitaDoc client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LICITADOC_*` prefix, `__` as separator)
//! 2. Project-level `.licitadoc/config.toml`
//! 3. User-level `~/.config/licitadoc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LICITADOC_API__BASE_URL` -> `api.base_url`,
//! `LICITADOC_AUTH__KEYRING_SERVICE` -> `auth.keyring_service`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use licita_config::LicitaConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = LicitaConfig::load_with_dotenv().expect("config");
//!
//! println!("API base: {}", config.api.base_url);
//! ```

mod api;
mod auth;
mod error;
mod general;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LicitaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LicitaConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".licitadoc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("LICITADOC_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("licitadoc").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = LicitaConfig::default();
        assert!(config.api.is_configured());
        assert_eq!(config.general.default_limit, 20);
        assert!(config.auth.credentials_dir.is_empty());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: LicitaConfig = LicitaConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "http://localhost:8000");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_toml_and_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".licitadoc")?;
            jail.create_file(
                ".licitadoc/config.toml",
                r#"
                [api]
                base_url = "https://toml.example.com"
                timeout_secs = 30
                "#,
            )?;
            jail.set_env("LICITADOC_API__BASE_URL", "https://env.example.com");

            let config: LicitaConfig = LicitaConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "https://env.example.com");
            assert_eq!(config.api.timeout_secs, 30, "toml still wins over defaults");
            Ok(())
        });
    }

    #[test]
    fn nested_env_separator_maps_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LICITADOC_AUTH__KEYRING_SERVICE", "licitadoc-cli-test");
            let config: LicitaConfig = LicitaConfig::figment().extract()?;
            assert_eq!(config.auth.keyring_service, "licitadoc-cli-test");
            Ok(())
        });
    }
}
