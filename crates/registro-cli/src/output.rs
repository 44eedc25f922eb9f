//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use registro_core::{Category, CategoryHierarchy, Document, Page};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is JSON
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print a single document
    pub fn print_document(&self, doc: &Document) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:           {}", doc.id);
                println!("Nombre:       {}", doc.nombre);
                println!("Tipo:         {}", doc.tipo);
                println!("Categoría:    {}", doc.categoria);
                if !doc.subcategoria.is_empty() {
                    println!("Subcategoría: {}", doc.subcategoria);
                }
                println!("Estado:       {}", doc.estado);
                println!("Subido:       {}", doc.fecha_subida.format("%Y-%m-%d %H:%M"));
                if !doc.descripcion.is_empty() {
                    println!();
                    println!("{}", doc.descripcion);
                }
            }
            OutputFormat::Json => print_json(doc),
            OutputFormat::Quiet => {
                println!("{}", doc.id);
            }
        }
    }

    /// Print one page of a (possibly filtered) document list
    pub fn print_page(&self, page: &Page<'_, &Document>) {
        match self.format {
            OutputFormat::Human => {
                if page.is_empty() {
                    println!("No documents found.");
                    return;
                }
                for doc in page.items {
                    println!("{}", format_row(doc));
                }
                println!();
                println!("{}", page_footer(page));
            }
            OutputFormat::Json => {
                print_json(&serde_json::json!({
                    "page": page.display_number(),
                    "page_count": page.page_count,
                    "total": page.total,
                    "items": page.items,
                }));
            }
            OutputFormat::Quiet => {
                for doc in page.items {
                    println!("{}", doc.id);
                }
            }
        }
    }

    /// Print the category taxonomy, or a single category's subcategories
    pub fn print_categories(&self, hierarchy: &CategoryHierarchy, only: Option<Category>) {
        let categories: Vec<_> = hierarchy
            .list_categories()
            .iter()
            .copied()
            .filter(|c| only.map_or(true, |o| o == *c))
            .collect();

        match self.format {
            OutputFormat::Human => {
                for category in &categories {
                    println!("{}", category);
                    for sub in hierarchy.list_subcategories(*category) {
                        println!("  - {}", sub);
                    }
                }
            }
            OutputFormat::Json => {
                let entries: Vec<_> = categories
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "category": c,
                            "subcategories": hierarchy.list_subcategories(*c),
                        })
                    })
                    .collect();
                print_json(&entries);
            }
            OutputFormat::Quiet => {
                for category in &categories {
                    if only.is_some() {
                        for sub in hierarchy.list_subcategories(*category) {
                            println!("{}", sub);
                        }
                    } else {
                        println!("{}", category);
                    }
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a warning to stderr (suppressed in quiet mode)
    pub fn warning(&self, message: &str) {
        if !self.is_quiet() {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

/// One table row for the human document list
fn format_row(doc: &Document) -> String {
    format!(
        "{} | {:<30} | {:<6} | {} | {:<14} | {:<17} | {}",
        short_id(&doc.id),
        truncate(&doc.nombre, 30),
        doc.tipo,
        doc.fecha_subida.format("%Y-%m-%d"),
        doc.categoria,
        truncate(&doc.subcategoria, 17),
        doc.estado
    )
}

/// "Page X of Y" footer
fn page_label<T>(page: &Page<'_, T>) -> String {
    format!("Page {} of {}", page.display_number(), page.page_count)
}

/// Table footer with previous/next hints
fn page_footer<T>(page: &Page<'_, T>) -> String {
    let mut footer = format!("{} | {} document(s)", page_label(page), page.total);
    let current = page.display_number();
    if page.has_previous() {
        footer.push_str(&format!(" | previous: --page {}", current - 1));
    }
    if page.has_next() {
        footer.push_str(&format!(" | next: --page {}", current + 1));
    }
    footer
}

/// First 8 characters of an id
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
