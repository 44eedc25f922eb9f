//! Document command handlers

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use serde_json::Value;
use thiserror::Error;

use registro_core::{
    filter, pagination, Category, DocumentDraft, DocumentState, DocumentStore, DocumentType,
    Field, FilterSpec, StoreError,
};

use crate::editor::{confirm, edit_description};
use crate::output::{print_json, short_id, Output};

// Field values shared by `create` and `edit`. Nothing is required here:
// missing values reach the store, which reports which field is wrong.
#[derive(Args, Debug, Clone, Default)]
pub struct DocumentFields {
    /// Document name
    #[arg(short, long)]
    pub nombre: Option<String>,
    /// Description
    #[arg(short, long)]
    pub descripcion: Option<String>,
    /// Document type (PDF, Word, Imagen)
    #[arg(short, long)]
    pub tipo: Option<DocumentType>,
    /// Category (Administrativo, Financiero, Legal)
    #[arg(short, long)]
    pub categoria: Option<Category>,
    /// Subcategory (must belong to the category; empty to clear)
    #[arg(short, long)]
    pub subcategoria: Option<String>,
    /// State (Activo, Inactivo)
    #[arg(short, long)]
    pub estado: Option<DocumentState>,
}

impl DocumentFields {
    /// Overlay the given values on `draft`
    ///
    /// Changing the category without naming a subcategory clears the old
    /// subcategory, which belonged to the previous category.
    pub fn apply_to(self, draft: &mut DocumentDraft) {
        if let Some(nombre) = self.nombre {
            draft.nombre = nombre;
        }
        if let Some(descripcion) = self.descripcion {
            draft.descripcion = descripcion;
        }
        if let Some(tipo) = self.tipo {
            draft.tipo = Some(tipo);
        }
        if let Some(estado) = self.estado {
            draft.estado = estado;
        }
        if let Some(categoria) = self.categoria {
            draft.set_categoria(categoria);
        }
        if let Some(subcategoria) = self.subcategoria {
            draft.subcategoria = subcategoria;
        }
    }

    fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.descripcion.is_none()
            && self.tipo.is_none()
            && self.categoria.is_none()
            && self.subcategoria.is_none()
            && self.estado.is_none()
    }
}

// Filter and paging options for `list`
#[derive(Args, Debug, Clone, Default)]
pub struct ListOptions {
    /// Only documents in this category
    #[arg(short, long)]
    pub categoria: Option<Category>,
    /// Only documents with this subcategory
    #[arg(short, long)]
    pub subcategoria: Option<String>,
    /// Only documents of this type
    #[arg(short, long)]
    pub tipo: Option<DocumentType>,
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
    /// Rows per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ListOptions {
    fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            category: self.categoria,
            subcategory: self.subcategoria.clone(),
            doc_type: self.tipo,
        }
    }
}

/// Create a new document
pub fn create(store: &mut DocumentStore, fields: DocumentFields, output: &Output) -> Result<()> {
    let mut draft = DocumentDraft::default();
    fields.apply_to(&mut draft);

    let doc = store.create(draft).map_err(user_error)?;

    output.success(&format!("Created document: {}", doc.id));
    output.print_document(&doc);

    Ok(())
}

/// List documents, filtered and paginated
pub fn list(
    store: &DocumentStore,
    options: ListOptions,
    default_page_size: usize,
    output: &Output,
) -> Result<()> {
    let spec = options.filter_spec();
    let visible = filter::apply(store.list(), &spec);

    let page_size = options.page_size.unwrap_or(default_page_size);
    let page = pagination::window(&visible, page_size, options.page.saturating_sub(1));

    if page.display_number() != options.page.max(1) && !output.is_json() {
        output.warning(&format!(
            "Page {} does not exist; showing page {}",
            options.page,
            page.display_number()
        ));
    }

    output.print_page(&page);
    Ok(())
}

/// Show a single document
pub fn show(store: &DocumentStore, id: String, output: &Output) -> Result<()> {
    let id = resolve_id(store, &id)?;
    let doc = store
        .get(&id)
        .ok_or_else(|| anyhow!("Document not found: {}", id))?;

    output.print_document(doc);
    Ok(())
}

/// Edit a document
///
/// Unspecified fields keep their current value. With `use_editor`, the
/// description is edited in $EDITOR.
pub fn edit(
    store: &mut DocumentStore,
    id: String,
    fields: DocumentFields,
    use_editor: bool,
    output: &Output,
) -> Result<()> {
    let id = resolve_id(store, &id)?;
    let current = store
        .get(&id)
        .ok_or_else(|| anyhow!("Document not found: {}", id))?;

    if fields.is_empty() && !use_editor {
        bail!("Nothing to change. Pass at least one field flag or --editor.");
    }

    let mut draft = DocumentDraft::from(current);
    fields.apply_to(&mut draft);

    if use_editor {
        draft.descripcion = edit_description(&draft.nombre, &draft.descripcion)?;
    }

    let doc = store.update(draft).map_err(user_error)?;

    output.success("Document updated");
    output.print_document(&doc);

    Ok(())
}

/// Delete a document
pub fn delete(store: &mut DocumentStore, id: String, yes: bool, output: &Output) -> Result<()> {
    let id = resolve_id(store, &id)?;

    if !yes && output.should_prompt() {
        if let Some(doc) = store.get(&id) {
            println!("Delete document: {} - {}", short_id(&doc.id), doc.nombre);
        }
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.remove(&id).map_err(user_error)?;

    output.success(&format!("Deleted document: {}", id));

    Ok(())
}

/// Print the whole collection as a JSON array
pub fn export(store: &DocumentStore) -> Result<()> {
    print_json(store.list());
    Ok(())
}

/// Why one imported record was skipped
#[derive(Error, Debug)]
pub enum RecordError {
    /// The record is not a document (unknown category or type, wrong shape)
    #[error("unreadable record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The store rejected the values
    #[error(transparent)]
    Rejected(#[from] StoreError),
}

impl RecordError {
    /// The offending field, when the store rejected the record
    pub fn field(&self) -> Option<Field> {
        match self {
            RecordError::Malformed(_) => None,
            RecordError::Rejected(e) => e.field(),
        }
    }
}

/// Outcome of importing a batch of records
#[derive(Debug, Default)]
pub struct ImportReport {
    pub created: usize,
    /// (1-based record number, name, error)
    pub failed: Vec<(usize, String, RecordError)>,
}

/// Create every record through the store, collecting per-record failures
///
/// Each record is decoded on its own, so one bad value only skips its record.
pub fn import_records(store: &mut DocumentStore, records: Vec<Value>) -> ImportReport {
    let mut report = ImportReport::default();
    for (idx, record) in records.into_iter().enumerate() {
        let nombre = record
            .get("nombre")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let created = serde_json::from_value::<DocumentDraft>(record)
            .map_err(RecordError::from)
            .and_then(|draft| store.create(draft).map_err(RecordError::from));

        match created {
            Ok(_) => report.created += 1,
            Err(e) => report.failed.push((idx + 1, nombre, e)),
        }
    }
    report
}

/// Read the JSON array of records in `path`
pub fn read_records(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Import file is not a JSON array: {:?}", path))
}

/// Import documents from a JSON file
pub fn import(store: &mut DocumentStore, path: &Path, output: &Output) -> Result<()> {
    let records = read_records(path)?;
    let total = records.len();
    let report = import_records(store, records);

    for (record, nombre, err) in &report.failed {
        output.warning(&format!("Record {} ('{}') skipped: {}", record, nombre, err));
    }

    if output.is_json() {
        print_json(&serde_json::json!({
            "total": total,
            "created": report.created,
            "failed": report.failed.len(),
        }));
    } else {
        output.success(&format!(
            "Imported {} of {} document(s)",
            report.created, total
        ));
    }

    Ok(())
}

/// Resolve a document ID (supports full ID or unique prefix)
pub fn resolve_id(store: &DocumentStore, id: &str) -> Result<String> {
    if store.get(id).is_some() {
        return Ok(id.to_string());
    }

    let matches: Vec<_> = store
        .list()
        .iter()
        .filter(|d| d.id.starts_with(id))
        .collect();

    match matches.len() {
        0 => bail!("No document found matching: {}", id),
        1 => Ok(matches[0].id.clone()),
        _ => {
            eprintln!("Multiple documents match '{}':", id);
            for doc in &matches {
                eprintln!("  {} - {}", doc.id, doc.nombre);
            }
            bail!("Ambiguous ID. Please provide more characters.");
        }
    }
}

/// Attach the recovery hint to a store error
fn user_error(err: StoreError) -> anyhow::Error {
    anyhow!("{}\n{}", err, err.recovery_suggestion())
}
