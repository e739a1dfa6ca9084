//! Dashboard endpoints.

use licita_core::company::Company;
use licita_core::document::Document;
use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiError, parse_json};

/// Administrator overview: totals and recent activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_companies: i64,
    pub total_documents: i64,
    pub total_users: i64,
    #[serde(default)]
    pub recent_documents: Vec<Document>,
    #[serde(default)]
    pub recent_companies: Vec<Company>,
}

/// Per-company client overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientStats {
    pub company_name: String,
    pub total_docs: i64,
    pub docs_valid: i64,
    pub docs_expired: i64,
    #[serde(default)]
    pub recent_docs: Vec<Document>,
}

impl ApiClient {
    /// Fetch the administrator dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        let resp = self
            .execute(self.http.get(self.url("/dashboard/admin/stats")))
            .await?;
        parse_json(resp).await
    }

    /// Fetch the client dashboard, optionally scoped to one company.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn client_stats(&self, company_id: Option<&str>) -> Result<ClientStats, ApiError> {
        let url = match company_id {
            Some(id) => format!(
                "{}?company_id={}",
                self.url("/dashboard/client/stats"),
                urlencoding::encode(id)
            ),
            None => self.url("/dashboard/client/stats"),
        };
        let resp = self.execute(self.http.get(url)).await?;
        parse_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn client_stats_parse_wire_shape() {
        let json = r#"{
            "company_name": "Empresa Alpha LTDA",
            "total_docs": 12,
            "docs_valid": 9,
            "docs_expired": 3,
            "recent_docs": []
        }"#;
        let stats: ClientStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_docs, 12);
        assert_eq!(stats.docs_valid + stats.docs_expired, 12);
    }

    #[test]
    fn admin_stats_default_empty_recents() {
        let json = r#"{
            "total_companies": 4,
            "total_documents": 40,
            "total_users": 9
        }"#;
        let stats: AdminStats = serde_json::from_str(json).unwrap();
        assert!(stats.recent_documents.is_empty());
        assert!(stats.recent_companies.is_empty());
    }
}
