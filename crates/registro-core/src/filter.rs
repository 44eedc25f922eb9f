//! Document filtering
//!
//! A filter is a conjunction of optional equality constraints on category,
//! subcategory and type. Unset constraints match everything, so the empty
//! filter is the identity. Output keeps input order.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Document, DocumentType};

/// Optional equality constraints combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub doc_type: Option<DocumentType>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_type(mut self, doc_type: DocumentType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    /// Subcategory constraint, with an empty string treated as unset
    fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref().filter(|s| !s.is_empty())
    }

    /// True if no constraint is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.subcategory().is_none() && self.doc_type.is_none()
    }

    /// Check a single document against every set constraint
    pub fn matches(&self, doc: &Document) -> bool {
        if let Some(category) = self.category {
            if doc.categoria != category {
                return false;
            }
        }
        if let Some(subcategory) = self.subcategory() {
            if doc.subcategoria != subcategory {
                return false;
            }
        }
        if let Some(doc_type) = self.doc_type {
            if doc.tipo != doc_type {
                return false;
            }
        }
        true
    }
}

/// Keep the documents matching `spec`, in input order
///
/// Accepts any sequence of document references, so results can be fed back
/// in: `apply(&apply(docs, &a), &b)` equals filtering once with both.
pub fn apply<'a, I>(documents: I, spec: &FilterSpec) -> Vec<&'a Document>
where
    I: IntoIterator<Item = &'a Document>,
{
    documents.into_iter().filter(|doc| spec.matches(doc)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentState;
    use chrono::Utc;

    fn doc(id: &str, categoria: Category, subcategoria: &str, tipo: DocumentType) -> Document {
        Document {
            id: id.to_string(),
            nombre: format!("Doc {}", id),
            descripcion: String::new(),
            tipo,
            fecha_subida: Utc::now(),
            estado: DocumentState::Activo,
            categoria,
            subcategoria: subcategoria.to_string(),
        }
    }

    fn sample() -> Vec<Document> {
        vec![
            doc("1", Category::Administrativo, "Acta", DocumentType::Pdf),
            doc("2", Category::Financiero, "Factura", DocumentType::Pdf),
            doc("3", Category::Financiero, "Presupuesto", DocumentType::Word),
            doc("4", Category::Legal, "", DocumentType::Imagen),
            doc("5", Category::Financiero, "Factura", DocumentType::Imagen),
            doc("6", Category::Administrativo, "Circular", DocumentType::Pdf),
        ]
    }

    fn ids(docs: &[&Document]) -> Vec<String> {
        docs.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let docs = sample();
        let spec = FilterSpec::new();
        assert!(spec.is_empty());

        let result = apply(&docs, &spec);
        assert_eq!(result.len(), docs.len());
        assert!(result.iter().zip(&docs).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_empty_subcategory_imposes_no_constraint() {
        let docs = sample();
        let spec = FilterSpec::new().with_subcategory("");
        assert!(spec.is_empty());
        assert_eq!(apply(&docs, &spec).len(), docs.len());
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let docs = sample();
        let result = apply(&docs, &FilterSpec::new().with_category(Category::Financiero));
        assert_eq!(ids(&result), vec!["2", "3", "5"]);
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let docs = sample();
        let spec = FilterSpec::new()
            .with_category(Category::Financiero)
            .with_subcategory("Factura")
            .with_type(DocumentType::Imagen);
        assert_eq!(ids(&apply(&docs, &spec)), vec!["5"]);
    }

    #[test]
    fn test_subcategory_without_category() {
        let docs = sample();
        let result = apply(&docs, &FilterSpec::new().with_subcategory("Factura"));
        assert_eq!(ids(&result), vec!["2", "5"]);
    }

    #[test]
    fn test_filters_compose() {
        let docs = sample();
        for category in Category::ALL {
            for doc_type in DocumentType::ALL {
                let staged = apply(
                    apply(&docs, &FilterSpec::new().with_category(category)),
                    &FilterSpec::new().with_type(doc_type),
                );
                let combined = apply(
                    &docs,
                    &FilterSpec::new().with_category(category).with_type(doc_type),
                );
                assert_eq!(ids(&staged), ids(&combined));
            }
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let docs = sample();
        let spec = FilterSpec::new()
            .with_category(Category::Legal)
            .with_type(DocumentType::Word);
        assert!(apply(&docs, &spec).is_empty());
    }

    #[test]
    fn test_input_is_untouched() {
        let docs = sample();
        let before = docs.clone();
        let _ = apply(&docs, &FilterSpec::new().with_category(Category::Legal));
        assert_eq!(docs, before);
    }
}
