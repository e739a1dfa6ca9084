//! Company management endpoints.

use licita_core::company::{Company, MembershipRole};
use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiError, parse_json};

/// Partial update payload for a company. `None` fields are omitted from the
/// request body. Wire field names follow the backend's Portuguese schema.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanyUpdate {
    #[serde(rename = "razao_social", skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(rename = "nome_fantasia", skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    #[serde(rename = "email_corporativo", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "responsavel_nome", skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(rename = "cep", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "logradouro", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "numero", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "complemento", skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(rename = "bairro", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "is_admin_verified", skip_serializing_if = "Option::is_none")]
    pub admin_verified: Option<bool>,
    #[serde(rename = "is_contract_signed", skip_serializing_if = "Option::is_none")]
    pub contract_signed: Option<bool>,
    #[serde(rename = "is_payment_active", skip_serializing_if = "Option::is_none")]
    pub payment_active: Option<bool>,
}

/// One member of a company's team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub role: String,
    #[serde(rename = "status", default)]
    pub active: bool,
    pub joined_at: String,
}

/// Invitation request for a new team member.
#[derive(Debug, Clone, Serialize)]
pub struct InvitePayload {
    pub email: String,
    pub role: MembershipRole,
}

/// Invitation result, with the backend's feedback message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteResponse {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub message: String,
}

impl ApiClient {
    /// List all companies (administrators only).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn companies(&self) -> Result<Vec<Company>, ApiError> {
        let resp = self.execute(self.http.get(self.url("/companies"))).await?;
        parse_json(resp).await
    }

    /// Fetch a single company.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn company(&self, id: &str) -> Result<Company, ApiError> {
        let resp = self
            .execute(self.http.get(self.url(&format!("/companies/{id}"))))
            .await?;
        parse_json(resp).await
    }

    /// Update a company's data or onboarding flags.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn update_company(
        &self,
        id: &str,
        payload: &CompanyUpdate,
    ) -> Result<Company, ApiError> {
        let resp = self
            .execute(
                self.http
                    .put(self.url(&format!("/companies/{id}")))
                    .json(payload),
            )
            .await?;
        parse_json(resp).await
    }

    /// List a company's team members.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn team(&self, company_id: &str) -> Result<Vec<Member>, ApiError> {
        let resp = self
            .execute(
                self.http
                    .get(self.url(&format!("/companies/{company_id}/members"))),
            )
            .await?;
        parse_json(resp).await
    }

    /// Invite a user to a company's team.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn invite_member(
        &self,
        company_id: &str,
        payload: &InvitePayload,
    ) -> Result<InviteResponse, ApiError> {
        let resp = self
            .execute(
                self.http
                    .post(self.url(&format!("/companies/{company_id}/members")))
                    .json(payload),
            )
            .await?;
        parse_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn update_payload_omits_unset_fields() {
        let payload = CompanyUpdate {
            contract_signed: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({"is_contract_signed": true}));
    }

    #[test]
    fn update_payload_uses_wire_field_names() {
        let payload = CompanyUpdate {
            legal_name: Some("Empresa Alpha LTDA".into()),
            city: Some("Curitiba".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "razao_social": "Empresa Alpha LTDA",
                "cidade": "Curitiba"
            })
        );
    }

    #[test]
    fn member_parses_wire_shape() {
        let json = r#"{
            "user_id": "usr-2",
            "name": null,
            "email": "viewer@example.com",
            "role": "VIEWER",
            "status": true,
            "joined_at": "2026-04-01T00:00:00Z"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert!(member.name.is_none());
        assert!(member.active);
    }

    #[test]
    fn invite_payload_serializes_role_uppercase() {
        let payload = InvitePayload {
            email: "new@example.com".into(),
            role: MembershipRole::Viewer,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["role"], "VIEWER");
    }
}
