//! Document vault and catalog endpoints.

use licita_core::document::{Document, DocumentCategory, DocumentType};
use serde::Serialize;

use crate::{ApiClient, ApiError, parse_json};

/// Upload request for a document. Structured certificates carry a catalog
/// `type_id`; legacy uploads leave it unset.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub target_company_id: String,
    pub title: Option<String>,
    pub type_id: Option<String>,
    pub authentication_code: Option<String>,
    pub expiration_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCreate {
    pub name: String,
    pub slug: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeCreate {
    pub name: String,
    pub slug: String,
    pub validity_days_default: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TypeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_days_default: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl ApiClient {
    /// Fetch the document catalog: categories with their nested types.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn catalog(&self) -> Result<Vec<DocumentCategory>, ApiError> {
        let resp = self
            .execute(self.http.get(self.url("/documents/types")))
            .await?;
        parse_json(resp).await
    }

    /// List documents, optionally scoped to one company (administrators may
    /// inspect any company's vault).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn documents(&self, company_id: Option<&str>) -> Result<Vec<Document>, ApiError> {
        let url = match company_id {
            Some(id) => format!(
                "{}?company_id={}",
                self.url("/documents/"),
                urlencoding::encode(id)
            ),
            None => self.url("/documents/"),
        };
        let resp = self.execute(self.http.get(url)).await?;
        parse_json(resp).await
    }

    /// Upload a document (multipart).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn upload(&self, request: UploadRequest) -> Result<Document, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(request.bytes).file_name(request.file_name),
            )
            .text("target_company_id", request.target_company_id);

        if let Some(title) = request.title {
            form = form.text("title", title);
        }
        if let Some(type_id) = request.type_id {
            form = form.text("type_id", type_id);
        }
        if let Some(code) = request.authentication_code {
            form = form.text("authentication_code", code);
        }
        if let Some(date) = request.expiration_date {
            form = form.text("expiration_date", date);
        }

        let resp = self
            .execute(self.http.post(self.url("/documents/upload")).multipart(form))
            .await?;
        parse_json(resp).await
    }

    /// Download a document's raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification, or
    /// `ApiError::Parse` when the body cannot be read.
    pub async fn download(&self, document_id: &str) -> Result<Vec<u8>, ApiError> {
        let resp = self
            .execute(
                self.http
                    .get(self.url(&format!("/documents/{document_id}/download"))),
            )
            .await?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    // --- Catalog administration ---

    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn create_category(
        &self,
        payload: &CategoryCreate,
    ) -> Result<DocumentCategory, ApiError> {
        let resp = self
            .execute(self.http.post(self.url("/documents/categories")).json(payload))
            .await?;
        parse_json(resp).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn update_category(
        &self,
        id: &str,
        payload: &CategoryUpdate,
    ) -> Result<DocumentCategory, ApiError> {
        let resp = self
            .execute(
                self.http
                    .put(self.url(&format!("/documents/categories/{id}")))
                    .json(payload),
            )
            .await?;
        parse_json(resp).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        self.execute(
            self.http
                .delete(self.url(&format!("/documents/categories/{id}"))),
        )
        .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn create_type(&self, payload: &TypeCreate) -> Result<DocumentType, ApiError> {
        let resp = self
            .execute(self.http.post(self.url("/documents/types")).json(payload))
            .await?;
        parse_json(resp).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn update_type(
        &self,
        id: &str,
        payload: &TypeUpdate,
    ) -> Result<DocumentType, ApiError> {
        let resp = self
            .execute(
                self.http
                    .put(self.url(&format!("/documents/types/{id}")))
                    .json(payload),
            )
            .await?;
        parse_json(resp).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] per the uniform classification.
    pub async fn delete_type(&self, id: &str) -> Result<(), ApiError> {
        self.execute(
            self.http
                .delete(self.url(&format!("/documents/types/{id}"))),
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
    fn category_update_omits_unset_fields() {
        let payload = CategoryUpdate {
            order: Some(3),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({"order": 3}));
    }

    #[test]
    fn type_create_serializes_full_payload() {
        let payload = TypeCreate {
            name: "CND Federal".into(),
            slug: "cnd-federal".into(),
            validity_days_default: 180,
            description: None,
            category_id: "cat-1".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "CND Federal",
                "slug": "cnd-federal",
                "validity_days_default": 180,
                "category_id": "cat-1"
            })
        );
    }
}
