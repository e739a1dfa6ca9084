use base64::Engine as _;
use chrono::{DateTime, Utc};
use licita_core::Identity;

use crate::error::AuthError;

/// Claims decoded from the LicitaDoc bearer token.
///
/// Decoding reads the JWT payload segment only — the signature is NOT
/// verified client-side. The result is display/UX data; the server re-checks
/// authorization on every request regardless of what this says.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    /// Raw token string (for re-attaching to requests).
    pub raw_token: String,
    /// Login identifier (`sub` claim).
    pub subject: String,
    /// Coarse role tag (`role` claim). Empty when the token carries none.
    pub role: String,
    /// Stable user id (`user_id` claim). Empty when the token carries none.
    pub user_id: String,
    /// Expiration time (`exp` claim), if present.
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionClaims {
    /// Decode a bearer token payload without verifying its signature.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the token is not three
    /// dot-separated segments, the payload is not valid base64url JSON, or
    /// the `sub` claim is missing.
    pub fn decode(token: &str) -> Result<Self, AuthError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::InvalidToken("not a JWT".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
        let value: serde_json::Value = serde_json::from_slice(&payload)
            .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))?;

        let subject = value["sub"]
            .as_str()
            .ok_or_else(|| AuthError::InvalidToken("missing sub claim".into()))?
            .to_string();
        let role = value["role"].as_str().unwrap_or_default().to_string();
        let user_id = value["user_id"].as_str().unwrap_or_default().to_string();
        let expires_at = match value.get("exp").and_then(serde_json::Value::as_i64) {
            Some(exp) => Some(
                DateTime::from_timestamp(exp, 0)
                    .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))?,
            ),
            None => None,
        };

        Ok(Self {
            raw_token: token.to_string(),
            subject,
            role,
            user_id,
            expires_at,
        })
    }

    /// Check if the token is already expired. Tokens without an `exp` claim
    /// never expire.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }

    /// Convert to a lightweight [`Identity`] for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> Identity {
        Identity {
            subject: self.subject.clone(),
            role: self.role.clone(),
            user_id: self.user_id.clone(),
            expires_at: self.expires_at,
        }
    }
}
