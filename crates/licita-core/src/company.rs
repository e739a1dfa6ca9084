//! Company and membership types.
//!
//! The backend exposes companies in a few historical shapes (`razao_social`
//! vs legacy `name`, `is_active` vs legacy `status`). All of them funnel
//! through the single reconciled [`Company`] type here; the defaulting rules
//! live in [`Company::active`] and nowhere else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Role of a user inside a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MembershipRole {
    Master,
    Viewer,
}

impl MembershipRole {
    /// String form as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Master => "MASTER",
            Self::Viewer => "VIEWER",
        }
    }
}

impl fmt::Display for MembershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipRole {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "MASTER" => Ok(Self::Master),
            "VIEWER" => Ok(Self::Viewer),
            other => Err(CoreError::Validation(format!(
                "unknown membership role '{other}' — expected MASTER or VIEWER"
            ))),
        }
    }
}

/// One entry per company the current identity may act on behalf of.
///
/// Returned by `GET /users/me/companies`; the tenancy resolver selects the
/// active one out of this set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMembership {
    pub id: String,
    #[serde(rename = "razao_social", alias = "name")]
    pub legal_name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    pub role: MembershipRole,
    #[serde(rename = "status", default)]
    pub active: bool,
    pub created_at: String,
}

/// Full company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    #[serde(rename = "razao_social", alias = "name")]
    pub legal_name: String,
    #[serde(rename = "nome_fantasia", default)]
    pub trade_name: Option<String>,
    pub created_at: String,

    // Contact / address
    #[serde(rename = "email_corporativo", default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "responsavel_nome", default)]
    pub contact_name: Option<String>,
    #[serde(rename = "responsavel_cpf", default)]
    pub contact_tax_id: Option<String>,
    #[serde(rename = "cep", default)]
    pub postal_code: Option<String>,
    #[serde(rename = "logradouro", default)]
    pub street: Option<String>,
    #[serde(rename = "numero", default)]
    pub number: Option<String>,
    #[serde(rename = "complemento", default)]
    pub complement: Option<String>,
    #[serde(rename = "bairro", default)]
    pub district: Option<String>,
    #[serde(rename = "cidade", default)]
    pub city: Option<String>,
    #[serde(rename = "estado", default)]
    pub state: Option<String>,

    // Onboarding flags
    #[serde(rename = "is_contract_signed", default)]
    pub contract_signed: bool,
    #[serde(rename = "is_payment_active", default)]
    pub payment_active: bool,
    #[serde(rename = "is_admin_verified", default)]
    pub admin_verified: bool,

    // Some routes report `is_active`, older ones `status`. Reconciled by
    // `active()`.
    #[serde(default)]
    is_active: Option<bool>,
    #[serde(default)]
    status: Option<bool>,
}

impl Company {
    /// Whether the company is active: `is_active` wins over legacy `status`,
    /// absence of both means inactive.
    #[must_use]
    pub fn active(&self) -> bool {
        self.is_active.or(self.status).unwrap_or(false)
    }

    /// A company is regular once onboarding is complete: contract signed,
    /// payment active, and verified by an administrator.
    #[must_use]
    pub const fn is_regular(&self) -> bool {
        self.contract_signed && self.payment_active && self.admin_verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn membership_deserializes_wire_shape() {
        let json = r#"{
            "id": "comp-1",
            "razao_social": "Empresa Alpha LTDA",
            "cnpj": "12.345.678/0001-90",
            "role": "MASTER",
            "status": true,
            "created_at": "2026-01-10T12:00:00Z"
        }"#;
        let m: CompanyMembership = serde_json::from_str(json).unwrap();
        assert_eq!(m.legal_name, "Empresa Alpha LTDA");
        assert_eq!(m.role, MembershipRole::Master);
        assert!(m.active);
    }

    #[test]
    fn membership_accepts_legacy_name_field() {
        let json = r#"{
            "id": "comp-2",
            "name": "Empresa Beta",
            "cnpj": "98.765.432/0001-10",
            "role": "VIEWER",
            "created_at": "2026-02-01T00:00:00Z"
        }"#;
        let m: CompanyMembership = serde_json::from_str(json).unwrap();
        assert_eq!(m.legal_name, "Empresa Beta");
        assert_eq!(m.role, MembershipRole::Viewer);
        assert!(!m.active, "missing status defaults to inactive");
    }

    #[test]
    fn company_active_prefers_is_active_over_status() {
        let json = r#"{
            "id": "comp-1",
            "cnpj": "12.345.678/0001-90",
            "razao_social": "Empresa Alpha",
            "created_at": "2026-01-10T12:00:00Z",
            "is_active": true,
            "status": false
        }"#;
        let c: Company = serde_json::from_str(json).unwrap();
        assert!(c.active());
    }

    #[test]
    fn company_active_falls_back_to_status_then_false() {
        let with_status = r#"{
            "id": "c", "cnpj": "x", "razao_social": "y",
            "created_at": "2026-01-01T00:00:00Z", "status": true
        }"#;
        let c: Company = serde_json::from_str(with_status).unwrap();
        assert!(c.active());

        let bare = r#"{
            "id": "c", "cnpj": "x", "razao_social": "y",
            "created_at": "2026-01-01T00:00:00Z"
        }"#;
        let c: Company = serde_json::from_str(bare).unwrap();
        assert!(!c.active());
    }

    #[test]
    fn regular_requires_all_three_flags() {
        let json = r#"{
            "id": "c", "cnpj": "x", "razao_social": "y",
            "created_at": "2026-01-01T00:00:00Z",
            "is_contract_signed": true,
            "is_payment_active": true,
            "is_admin_verified": false
        }"#;
        let c: Company = serde_json::from_str(json).unwrap();
        assert!(!c.is_regular());
    }

    #[test]
    fn membership_role_display() {
        assert_eq!(MembershipRole::Master.to_string(), "MASTER");
        assert_eq!(MembershipRole::Viewer.as_str(), "VIEWER");
    }

    #[test]
    fn membership_role_parses_case_insensitively() {
        assert_eq!("master".parse::<MembershipRole>().unwrap(), MembershipRole::Master);
        assert_eq!("VIEWER".parse::<MembershipRole>().unwrap(), MembershipRole::Viewer);
        assert!("owner".parse::<MembershipRole>().is_err());
    }
}
