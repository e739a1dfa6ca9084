//! Network collaborators consumed by the session.
//!
//! The session only needs two remote operations; abstracting them lets tests
//! run against in-memory fakes while production wires in [`ApiClient`].

use licita_api::{ApiClient, ApiError};
use licita_auth::AuthError;
use licita_core::company::CompanyMembership;

/// The remote operations the session depends on.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Exchange credentials for a bearer token.
    async fn authenticate(&self, identifier: &str, secret: &str) -> Result<String, AuthError>;

    /// Fetch the companies the current identity may act on behalf of.
    async fn companies_for_current_identity(&self)
    -> Result<Vec<CompanyMembership>, ApiError>;
}

impl Gateway for ApiClient {
    async fn authenticate(&self, identifier: &str, secret: &str) -> Result<String, AuthError> {
        Ok(self.sign_in(identifier, secret).await?.access_token)
    }

    async fn companies_for_current_identity(
        &self,
    ) -> Result<Vec<CompanyMembership>, ApiError> {
        self.my_companies().await
    }
}
