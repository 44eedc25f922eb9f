//! Category hierarchy
//!
//! The fixed two-level taxonomy (category -> subcategories) used to classify
//! documents. The same lookup narrows the options a front end offers and
//! enforces the category/subcategory rule inside [`crate::DocumentStore`].

use crate::models::Category;

/// Immutable category -> subcategory lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryHierarchy {
    categories: Vec<Category>,
    subcategories: Vec<Vec<String>>,
}

impl CategoryHierarchy {
    /// Build a hierarchy from `(category, subcategories)` entries
    ///
    /// Entry order is display order. A repeated category keeps its first entry.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<S>)>,
        S: Into<String>,
    {
        let mut categories = Vec::new();
        let mut subcategories = Vec::new();

        for (category, subs) in entries {
            if categories.contains(&category) {
                continue;
            }
            categories.push(category);
            subcategories.push(subs.into_iter().map(Into::into).collect());
        }

        Self {
            categories,
            subcategories,
        }
    }

    /// The standard registry taxonomy
    pub fn standard() -> Self {
        Self::new([
            (Category::Administrativo, vec!["Acta", "Circular", "Memorando"]),
            (
                Category::Financiero,
                vec!["Factura", "Informe de gastos", "Presupuesto"],
            ),
            (Category::Legal, vec!["Contrato", "Resolución", "Normatividad"]),
        ])
    }

    /// Categories in display order
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Subcategories of `category` in display order (empty if unknown)
    pub fn list_subcategories(&self, category: Category) -> &[String] {
        self.categories
            .iter()
            .position(|c| *c == category)
            .map(|idx| self.subcategories[idx].as_slice())
            .unwrap_or(&[])
    }

    /// True iff `subcategory` is empty or belongs to `category`
    pub fn is_valid(&self, category: Category, subcategory: &str) -> bool {
        subcategory.is_empty()
            || self
                .list_subcategories(category)
                .iter()
                .any(|s| s == subcategory)
    }
}

impl Default for CategoryHierarchy {
    fn default() -> Self {
        Self::standard()
    }
}
