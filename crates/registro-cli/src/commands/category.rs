//! Category command handler

use anyhow::Result;

use registro_core::{Category, CategoryHierarchy};

use crate::output::Output;

/// List categories with their subcategories, or one category's subcategories
pub fn list(hierarchy: &CategoryHierarchy, category: Option<Category>, output: &Output) -> Result<()> {
    output.print_categories(hierarchy, category);
    Ok(())
}
