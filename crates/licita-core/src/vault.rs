//! Vault grouping: documents by legal category and validity bucket.
//!
//! Categorization matches configurable keywords against the lowercased
//! document title (or filename). The keyword dictionary is product data, not
//! a contract — [`VaultRules::licitation_defaults`] mirrors the current
//! product catalog, and callers may supply their own rules.

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// One category with the keywords that route a document into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultRule {
    pub category: String,
    pub keywords: Vec<String>,
}

/// Ordered rule set plus the fallback category for unmatched documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultRules {
    rules: Vec<VaultRule>,
    fallback: String,
}

impl VaultRules {
    #[must_use]
    pub fn new(rules: Vec<VaultRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The product's current legal categories for public-tender documents.
    #[must_use]
    pub fn licitation_defaults() -> Self {
        let rule = |category: &str, keywords: &[&str]| VaultRule {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        };
        Self::new(
            vec![
                rule(
                    "Habilitação Jurídica",
                    &[
                        "contrato social",
                        "estatuto",
                        "ato constitutivo",
                        "cartão cnpj",
                        "requerimento de empresário",
                    ],
                ),
                rule(
                    "Regularidade Fiscal e Trabalhista",
                    &[
                        "municipal",
                        "estadual",
                        "federal",
                        "união",
                        "fgts",
                        "trabalhista",
                        "cnd",
                        "inss",
                        "dívida ativa",
                    ],
                ),
                rule(
                    "Qualificação Econômico-Financeira",
                    &[
                        "balanço",
                        "falência",
                        "concordata",
                        "patrimonial",
                        "indices",
                        "contábil",
                    ],
                ),
                rule(
                    "Qualificação Técnica",
                    &["atestado", "crea", "cau", "acervo", "cat", "capacidade"],
                ),
                rule(
                    "Declarações",
                    &["declaração", "cumprimento", "sustentabilidade", "menor"],
                ),
            ],
            "Outros Documentos",
        )
    }

    /// Resolve the category for a display term (already expected lowercased
    /// by [`group_documents`]; lowercased here again for direct callers).
    #[must_use]
    pub fn categorize(&self, term: &str) -> &str {
        let term = term.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| term.contains(k.as_str())) {
                return &rule.category;
            }
        }
        &self.fallback
    }

    /// Category names in display order, fallback last.
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.iter().map(|r| r.category.as_str()).collect();
        names.push(&self.fallback);
        names
    }
}

/// One rendered vault section: a category with its current and expired
/// documents.
#[derive(Debug, Clone, Serialize)]
pub struct VaultSection {
    pub category: String,
    pub current: Vec<Document>,
    pub expired: Vec<Document>,
}

/// Group documents by category and validity, preserving rule order.
///
/// Every category appears in the output even when empty, so rendering order
/// is stable regardless of the input.
#[must_use]
pub fn group_documents(documents: Vec<Document>, rules: &VaultRules) -> Vec<VaultSection> {
    let mut sections: Vec<VaultSection> = rules
        .category_names()
        .into_iter()
        .map(|name| VaultSection {
            category: name.to_string(),
            current: Vec::new(),
            expired: Vec::new(),
        })
        .collect();

    for doc in documents {
        let category = rules.categorize(doc.display_term());
        let section = sections
            .iter_mut()
            .find(|s| s.category == category)
            .unwrap_or_else(|| unreachable!("categorize always returns a known category"));
        if doc.is_expired() {
            section.expired.push(doc);
        } else {
            section.current.push(doc);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn doc(id: &str, title: &str, status: &str) -> Document {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "filename": format!("{id}.pdf"),
            "title": title,
            "status": status,
            "created_at": "2026-01-01T00:00:00Z",
        }))
        .unwrap()
    }

    #[rstest]
    #[case("Contrato Social Consolidado", "Habilitação Jurídica")]
    #[case("CND Federal", "Regularidade Fiscal e Trabalhista")]
    #[case("Certificado de Regularidade do FGTS", "Regularidade Fiscal e Trabalhista")]
    #[case("Balanço Patrimonial 2025", "Qualificação Econômico-Financeira")]
    #[case("Atestado de Capacidade Técnica", "Qualificação Técnica")]
    #[case("Declaração de Cumprimento", "Declarações")]
    #[case("Nota Fiscal Avulsa", "Outros Documentos")]
    fn default_rules_route_known_titles(#[case] title: &str, #[case] expected: &str) {
        let rules = VaultRules::licitation_defaults();
        assert_eq!(rules.categorize(title), expected);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rules = VaultRules::licitation_defaults();
        assert_eq!(rules.categorize("ESTATUTO SOCIAL"), "Habilitação Jurídica");
    }

    #[test]
    fn grouping_splits_expired_from_current() {
        let rules = VaultRules::licitation_defaults();
        let sections = group_documents(
            vec![
                doc("a", "CND Federal", "valid"),
                doc("b", "CND Estadual", "expired"),
                doc("c", "CND Municipal", "warning"),
            ],
            &rules,
        );

        let fiscal = sections
            .iter()
            .find(|s| s.category == "Regularidade Fiscal e Trabalhista")
            .unwrap();
        assert_eq!(fiscal.current.len(), 2, "valid + warning stay current");
        assert_eq!(fiscal.expired.len(), 1);
    }

    #[test]
    fn all_categories_present_even_when_empty() {
        let rules = VaultRules::licitation_defaults();
        let sections = group_documents(Vec::new(), &rules);
        assert_eq!(sections.len(), 6);
        assert_eq!(sections.last().unwrap().category, "Outros Documentos");
        assert!(sections.iter().all(|s| s.current.is_empty() && s.expired.is_empty()));
    }

    #[test]
    fn custom_rules_override_defaults() {
        let rules = VaultRules::new(
            vec![VaultRule {
                category: "Contratos".into(),
                keywords: vec!["contrato".into()],
            }],
            "Resto",
        );
        let sections = group_documents(vec![doc("a", "Contrato de Locação", "valid")], &rules);
        assert_eq!(sections[0].category, "Contratos");
        assert_eq!(sections[0].current.len(), 1);
        assert_eq!(sections[1].category, "Resto");
    }

    #[test]
    fn untitled_documents_group_by_filename() {
        let rules = VaultRules::licitation_defaults();
        let untitled: Document = serde_json::from_value(serde_json::json!({
            "id": "x",
            "filename": "balanço-2025.pdf",
            "status": "valid",
            "created_at": "2026-01-01T00:00:00Z",
        }))
        .unwrap();
        let sections = group_documents(vec![untitled], &rules);
        let eco = sections
            .iter()
            .find(|s| s.category == "Qualificação Econômico-Financeira")
            .unwrap();
        assert_eq!(eco.current.len(), 1);
    }
}
