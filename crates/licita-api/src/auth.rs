//! Authentication and onboarding endpoints.
//!
//! The token endpoint is unauthenticated traffic: a 401 here means bad
//! credentials, not an expired session, so it deliberately bypasses the
//! session-teardown classification and maps into [`AuthError`] instead.

use licita_auth::AuthError;
use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiError, parse_json};

/// Response of the OAuth2 password-flow token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Payload for account registration. The backend creates a provisional
/// company for the new user as part of the same transaction.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
}

/// New user record returned by registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub company_id: Option<String>,
    pub created_at: String,
}

impl ApiClient {
    /// Exchange credentials for a bearer token (OAuth2 password flow,
    /// form-urlencoded `username`/`password`).
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidCredentials` on 401, `AuthError::Network` on
    /// transport failure, `AuthError::Api` on any other non-success status.
    pub async fn sign_in(&self, identifier: &str, secret: &str) -> Result<TokenResponse, AuthError> {
        let form = [("username", identifier), ("password", secret)];
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        resp.json()
            .await
            .map_err(|e| AuthError::Network(format!("parse token response: {e}")))
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification (a 400 for a
    /// duplicate e-mail passes through as `ApiError::Api`).
    pub async fn register(&self, payload: &RegisterPayload) -> Result<RegisteredUser, ApiError> {
        let resp = self
            .execute(self.http.post(self.url("/auth/register")).json(payload))
            .await?;
        parse_json(resp).await
    }

    /// Activate the account's payment flag through the simulated checkout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn simulate_payment(&self, email: &str) -> Result<(), ApiError> {
        self.execute(
            self.http
                .post(self.url("/auth/simulate-payment"))
                .json(&serde_json::json!({ "email": email })),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_response_parses_wire_shape() {
        let json = r#"{"access_token":"abc.def.ghi","token_type":"bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc.def.ghi");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn registered_user_tolerates_missing_company() {
        let json = r#"{
            "id": "usr-1",
            "email": "new@example.com",
            "role": "client",
            "created_at": "2026-05-01T00:00:00Z"
        }"#;
        let user: RegisteredUser = serde_json::from_str(json).unwrap();
        assert!(user.company_id.is_none());
    }

    #[test]
    fn register_payload_serializes_expected_fields() {
        let payload = RegisterPayload {
            email: "new@example.com".into(),
            password: "senha1234".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"email": "new@example.com", "password": "senha1234"})
        );
    }
}
