//! Document and catalog wire types.
//!
//! Documents come in two generations: legacy uploads (filename only) and
//! structured vault certificates carrying a catalog type/category. Both are
//! served through the unified shape below; `is_structured` tells them apart.

use serde::{Deserialize, Serialize};

/// Unified document record (legacy uploads and structured certificates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Validity status as reported by the backend: `valid`, `warning`
    /// (expiring soon) or `expired`.
    pub status: String,
    #[serde(default)]
    pub expiration_date: Option<String>,
    pub created_at: String,

    #[serde(default)]
    pub is_structured: bool,
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub authentication_code: Option<String>,
}

impl Document {
    /// Expired documents move to the vault's history bucket; `valid` and
    /// `warning` both count as current.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.status == "expired"
    }

    /// Display term used for grouping: title when present, filename otherwise.
    #[must_use]
    pub fn display_term(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.filename)
    }
}

/// A catalog document type (e.g. a specific certificate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub validity_days_default: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// A catalog category grouping document types, ordered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub order: i64,
    #[serde(default)]
    pub types: Vec<DocumentType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn legacy_document_defaults_structured_fields() {
        let json = r#"{
            "id": "doc-1",
            "filename": "contrato_social.pdf",
            "status": "valid",
            "created_at": "2026-03-01T00:00:00Z"
        }"#;
        let d: Document = serde_json::from_str(json).unwrap();
        assert!(!d.is_structured);
        assert!(d.type_id.is_none());
        assert!(!d.is_expired());
        assert_eq!(d.display_term(), "contrato_social.pdf");
    }

    #[test]
    fn warning_status_counts_as_current() {
        let json = r#"{
            "id": "doc-2",
            "filename": "cnd_federal.pdf",
            "status": "warning",
            "created_at": "2026-03-01T00:00:00Z"
        }"#;
        let d: Document = serde_json::from_str(json).unwrap();
        assert!(!d.is_expired());
    }

    #[test]
    fn title_wins_over_filename_for_display() {
        let json = r#"{
            "id": "doc-3",
            "filename": "upload_18312.pdf",
            "title": "Certidão Negativa Municipal",
            "status": "expired",
            "created_at": "2026-03-01T00:00:00Z"
        }"#;
        let d: Document = serde_json::from_str(json).unwrap();
        assert!(d.is_expired());
        assert_eq!(d.display_term(), "Certidão Negativa Municipal");
    }

    #[test]
    fn catalog_category_nests_types() {
        let json = r#"{
            "id": "cat-1",
            "name": "Regularidade Fiscal",
            "slug": "regularidade-fiscal",
            "order": 2,
            "types": [
                {
                    "id": "typ-1",
                    "name": "CND Federal",
                    "slug": "cnd-federal",
                    "validity_days_default": 180
                }
            ]
        }"#;
        let c: DocumentCategory = serde_json::from_str(json).unwrap();
        assert_eq!(c.types.len(), 1);
        assert_eq!(c.types[0].validity_days_default, 180);
        assert!(c.types[0].description.is_none());
    }
}
