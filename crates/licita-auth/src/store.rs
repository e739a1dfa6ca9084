use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const TOKEN_ENV: &str = "LICITADOC_AUTH__TOKEN";
const KEYRING_USER: &str = "bearer-token";
const TOKEN_FILE_NAME: &str = "credentials";
const ACTIVE_COMPANY_FILE_NAME: &str = "active_company";

/// Persistent storage for the two durable values the client keeps between
/// runs: the bearer token and the active company id.
///
/// The token tiering follows the CLI convention: OS keychain first, then the
/// `LICITADOC_AUTH__TOKEN` environment variable, then a file under the store
/// root. The active company id is file-only. Both values are written
/// whole-file via a temp-and-rename so a reader never observes a partial
/// write.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    service: String,
    root: PathBuf,
    use_keyring: bool,
}

impl CredentialStore {
    /// Store backed by the OS keychain (service name from config) with file
    /// fallback under `credentials_dir`, or `~/.licitadoc` when empty.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` when no home directory can be resolved and
    /// no explicit `credentials_dir` was given.
    pub fn from_config(keyring_service: &str, credentials_dir: &str) -> Result<Self, AuthError> {
        let root = if credentials_dir.is_empty() {
            dirs::home_dir().map(|h| h.join(".licitadoc")).ok_or_else(|| {
                AuthError::Store("home directory not found — cannot store credentials".into())
            })?
        } else {
            PathBuf::from(credentials_dir)
        };
        Ok(Self {
            service: keyring_service.to_string(),
            root,
            use_keyring: true,
        })
    }

    /// File-only store rooted at an explicit directory. Skips the keychain
    /// and environment tiers so independent instances stay isolated (tests,
    /// sandboxed runs).
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            service: String::new(),
            root: root.into(),
            use_keyring: false,
        }
    }

    // --- Token ---

    /// Persist the bearer token. Keychain first, file fallback.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if both keychain and file storage fail.
    pub fn store_token(&self, token: &str) -> Result<(), AuthError> {
        if self.use_keyring {
            match keyring::Entry::new(&self.service, KEYRING_USER) {
                Ok(entry) => match entry.set_password(token) {
                    Ok(()) => return Ok(()),
                    Err(error) => {
                        tracing::warn!(%error, "keyring store failed; falling back to file");
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, "keyring unavailable; falling back to file");
                }
            }
        }
        self.write_file(&self.root.join(TOKEN_FILE_NAME), token)
    }

    /// Load the bearer token. Priority: keychain → env → file. Empty or
    /// whitespace-only values count as absent.
    #[must_use]
    pub fn load_token(&self) -> Option<String> {
        if self.use_keyring {
            if let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
                && let Ok(token) = entry.get_password()
                && !token.is_empty()
            {
                return Some(token);
            }
            if let Ok(token) = std::env::var(TOKEN_ENV) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
        Self::read_file(&self.root.join(TOKEN_FILE_NAME))
    }

    /// Remove the bearer token from keychain and file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the credentials file cannot be removed.
    pub fn clear_token(&self) -> Result<(), AuthError> {
        if self.use_keyring
            && let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
        {
            let _ = entry.delete_credential();
        }
        Self::remove_file(&self.root.join(TOKEN_FILE_NAME))
    }

    /// Detect which tier the current token came from (for status display).
    #[must_use]
    pub fn token_source(&self) -> Option<String> {
        if self.use_keyring {
            if let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
                && entry.get_password().is_ok_and(|t| !t.is_empty())
            {
                return Some("keyring".into());
            }
            if std::env::var(TOKEN_ENV).is_ok_and(|t| !t.is_empty()) {
                return Some("env".into());
            }
        }
        Self::read_file(&self.root.join(TOKEN_FILE_NAME)).map(|_| "file".into())
    }

    // --- Active company ---

    /// Persist the active company id.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the selection file cannot be written.
    pub fn store_active_company(&self, id: &str) -> Result<(), AuthError> {
        self.write_file(&self.root.join(ACTIVE_COMPANY_FILE_NAME), id)
    }

    /// Load the persisted active company id, if any.
    #[must_use]
    pub fn load_active_company(&self) -> Option<String> {
        Self::read_file(&self.root.join(ACTIVE_COMPANY_FILE_NAME))
    }

    /// Remove the persisted active company id.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the selection file cannot be removed.
    pub fn clear_active_company(&self) -> Result<(), AuthError> {
        Self::remove_file(&self.root.join(ACTIVE_COMPANY_FILE_NAME))
    }

    // --- Private file helpers ---

    fn write_file(&self, path: &Path, value: &str) -> Result<(), AuthError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::Store(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        // Whole-value atomic write: temp file in the same directory, then
        // rename over the target.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)
            .map_err(|e| AuthError::Store(format!("write {}: {e}", tmp.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::Store(format!("chmod {}: {e}", tmp.display())))?;
        }
        fs::rename(&tmp, path)
            .map_err(|e| AuthError::Store(format!("rename {}: {e}", path.display())))?;

        Ok(())
    }

    fn read_file(path: &Path) -> Option<String> {
        fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn remove_file(path: &Path) -> Result<(), AuthError> {
        if path.exists() {
            fs::remove_file(path).map_err(|e| {
                AuthError::Store(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> (tempfile::TempDir, CredentialStore) {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = CredentialStore::at(tmp.path());
        (tmp, store)
    }

    #[test]
    fn token_store_load_clear_cycle() {
        let (_tmp, store) = store();
        assert!(store.load_token().is_none());

        store.store_token("jwt_abc123").expect("store");
        assert_eq!(store.load_token().as_deref(), Some("jwt_abc123"));
        assert_eq!(store.token_source().as_deref(), Some("file"));

        store.clear_token().expect("clear");
        assert!(store.load_token().is_none());
        assert!(store.token_source().is_none());
    }

    #[test]
    fn clear_token_is_idempotent() {
        let (_tmp, store) = store();
        store.clear_token().expect("clearing nothing is fine");
        store.store_token("t").expect("store");
        store.clear_token().expect("first clear");
        store.clear_token().expect("second clear");
    }

    #[test]
    fn active_company_round_trip() {
        let (_tmp, store) = store();
        assert!(store.load_active_company().is_none());

        store.store_active_company("comp-1").expect("store");
        assert_eq!(store.load_active_company().as_deref(), Some("comp-1"));

        store.store_active_company("comp-2").expect("overwrite");
        assert_eq!(store.load_active_company().as_deref(), Some("comp-2"));

        store.clear_active_company().expect("clear");
        assert!(store.load_active_company().is_none());
    }

    #[test]
    fn whitespace_only_values_count_as_absent() {
        let (tmp, store) = store();
        fs::write(tmp.path().join(TOKEN_FILE_NAME), "   \n  ").expect("write");
        assert!(store.load_token().is_none());
    }

    #[test]
    fn token_and_selection_are_independent_files() {
        let (_tmp, store) = store();
        store.store_token("jwt").expect("token");
        store.store_active_company("comp-1").expect("company");

        store.clear_token().expect("clear token");
        assert_eq!(
            store.load_active_company().as_deref(),
            Some("comp-1"),
            "clearing the token must not touch the selection"
        );
    }

    #[cfg(unix)]
    #[test]
    fn credential_files_are_private() {
        use std::os::unix::fs::PermissionsExt;
        let (tmp, store) = store();
        store.store_token("jwt").expect("store");
        let mode = fs::metadata(tmp.path().join(TOKEN_FILE_NAME))
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "credentials file should be 0600");
    }

    #[test]
    fn independent_stores_do_not_share_state() {
        let (_a, store_a) = store();
        let (_b, store_b) = store();
        store_a.store_token("token-a").expect("store");
        assert!(store_b.load_token().is_none());
    }
}
