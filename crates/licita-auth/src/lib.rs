//! # licita-auth
//!
//! Bearer-token handling for the LicitaDoc client.
//!
//! Provides unverified claims decoding (`SessionClaims`), credential
//! persistence (OS keychain with env/file fallback via [`CredentialStore`]),
//! and the auth error taxonomy.

pub mod claims;
pub mod error;
pub mod store;

pub use claims::SessionClaims;
pub use error::AuthError;
pub use store::CredentialStore;

/// Decode a persisted token into claims, treating expired tokens as absent.
///
/// Returns `Ok(None)` when no token is stored or the stored token has
/// expired (the caller decides whether to clear it). Malformed tokens are an
/// error so callers can distinguish corruption from absence.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` when a stored token cannot be decoded.
pub fn rehydrate(store: &CredentialStore) -> Result<Option<SessionClaims>, AuthError> {
    let Some(token) = store.load_token() else {
        return Ok(None);
    };
    let claims = SessionClaims::decode(&token)?;
    if claims.is_expired() {
        tracing::warn!(
            expires_at = ?claims.expires_at,
            "stored token is expired — session will be cleared",
        );
        return Ok(None);
    }
    Ok(Some(claims))
}
