//! Credential storage configuration.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "licitadoc-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// OS keychain service name. Override for testing (e.g.
    /// `"licitadoc-cli-test"`) to avoid touching production credentials.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Directory for the file-backed credential fallback. Empty means
    /// `~/.licitadoc`.
    #[serde(default)]
    pub credentials_dir: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            credentials_dir: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_use_cli_service_and_home_dir() {
        let config = AuthConfig::default();
        assert_eq!(config.keyring_service, "licitadoc-cli");
        assert!(config.credentials_dir.is_empty());
    }
}
