//! Current-user endpoints.

use licita_core::company::CompanyMembership;
use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiError, parse_json};

/// Profile of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
    pub role: String,
}

impl ApiClient {
    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let resp = self.execute(self.http.get(self.url("/users/me"))).await?;
        parse_json(resp).await
    }

    /// Fetch the companies the signed-in user may act on behalf of.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn my_companies(&self) -> Result<Vec<CompanyMembership>, ApiError> {
        let resp = self
            .execute(self.http.get(self.url("/users/me/companies")))
            .await?;
        parse_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_parses_wire_shape() {
        let json = r#"{
            "id": "usr-1",
            "email": "user@example.com",
            "is_active": true,
            "role": "client"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.email, "user@example.com");
        assert!(profile.is_active);
    }

    #[test]
    fn memberships_parse_as_list() {
        let json = r#"[
            {
                "id": "comp-1",
                "razao_social": "Matriz LTDA",
                "cnpj": "12.345.678/0001-90",
                "role": "MASTER",
                "status": true,
                "created_at": "2026-01-01T00:00:00Z"
            },
            {
                "id": "comp-2",
                "razao_social": "Filial LTDA",
                "cnpj": "12.345.678/0002-71",
                "role": "VIEWER",
                "status": true,
                "created_at": "2026-02-01T00:00:00Z"
            }
        ]"#;
        let memberships: Vec<CompanyMembership> = serde_json::from_str(json).unwrap();
        assert_eq!(memberships.len(), 2);
        assert_eq!(memberships[0].id, "comp-1");
        assert_eq!(memberships[1].legal_name, "Filial LTDA");
    }
}
