//! Document store
//!
//! The `DocumentStore` owns the authoritative, ordered collection of
//! documents and is its only writer. It validates drafts against the
//! category hierarchy, assigns ids and upload timestamps, and snapshots the
//! whole collection through a [`PersistencePort`] after every successful
//! mutation.
//!
//! ## Persistence
//!
//! Persistence is best-effort. A failed save is logged and the in-memory
//! collection stays authoritative; the operation still succeeds. A missing
//! or unreadable snapshot on open yields an empty collection.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = DocumentStore::open_with_config(&config)?;
//!
//! let doc = store.create(
//!     DocumentDraft::new("Acta 1")
//!         .with_tipo(DocumentType::Pdf)
//!         .with_categoria(Category::Administrativo)
//!         .with_subcategoria("Acta"),
//! )?;
//!
//! let visible = filter::apply(store.list(), &FilterSpec::new());
//! let page = pagination::window(&visible, 5, 0);
//! ```

use std::collections::HashSet;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::{Config, StorageBackend};
use crate::error::{Field, StoreError, StoreResult};
use crate::hierarchy::CategoryHierarchy;
use crate::models::{Document, DocumentDraft, ValidDraft};
use crate::storage::{FilePersistence, PersistencePort, SqlitePersistence};

/// Key under which the collection snapshot is stored
pub const STORAGE_KEY: &str = "documents";

/// Authoritative in-memory document collection
pub struct DocumentStore {
    /// Documents in insertion order
    documents: Vec<Document>,
    /// Taxonomy used to validate category/subcategory pairs
    hierarchy: CategoryHierarchy,
    /// Snapshot backend
    persistence: Box<dyn PersistencePort>,
}

impl DocumentStore {
    /// Open the store over `persistence`, loading any saved snapshot
    pub fn open(persistence: impl PersistencePort + 'static, hierarchy: CategoryHierarchy) -> Self {
        let persistence: Box<dyn PersistencePort> = Box::new(persistence);
        let documents = load_documents(&*persistence, &hierarchy);

        info!(
            backend = %persistence.describe(),
            count = documents.len(),
            "document store opened"
        );

        Self {
            documents,
            hierarchy,
            persistence,
        }
    }

    /// Open the store with the backend selected in `config`
    ///
    /// Fails only if the backend itself cannot be set up; an unreadable
    /// snapshot still opens an empty store.
    pub fn open_with_config(config: &Config) -> Result<Self> {
        let hierarchy = CategoryHierarchy::standard();
        let store = match config.storage {
            StorageBackend::File => {
                Self::open(FilePersistence::new(&config.data_dir), hierarchy)
            }
            StorageBackend::Sqlite => {
                let sqlite = SqlitePersistence::open(config.sqlite_path())
                    .context("Failed to open SQLite database")?;
                Self::open(sqlite, hierarchy)
            }
        };
        Ok(store)
    }

    /// All documents in insertion order
    pub fn list(&self) -> &[Document] {
        &self.documents
    }

    /// Get a document by id
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The taxonomy this store validates against
    pub fn hierarchy(&self) -> &CategoryHierarchy {
        &self.hierarchy
    }

    /// Description of the persistence backend
    pub fn backend(&self) -> String {
        self.persistence.describe()
    }

    // ==================== Mutations ====================

    /// Validate `draft` and append a new document
    ///
    /// The draft's `id` is ignored; the store assigns a fresh one and stamps
    /// the upload time.
    pub fn create(&mut self, draft: DocumentDraft) -> StoreResult<Document> {
        let fields = self.validate(draft)?;
        let id = self.next_id();
        let doc = Document::from_valid_draft(id, Utc::now(), fields);

        self.documents.push(doc.clone());
        info!(id = %doc.id, nombre = %doc.nombre, "document created");
        self.persist();

        Ok(doc)
    }

    /// Replace every field of an existing document except its id and upload time
    pub fn update(&mut self, draft: DocumentDraft) -> StoreResult<Document> {
        let id = draft
            .id
            .clone()
            .ok_or_else(|| StoreError::validation(Field::Id, "an id is required to update"))?;
        let idx = self
            .position(&id)
            .ok_or_else(|| StoreError::not_found(&id))?;
        let fields = self.validate(draft)?;

        let doc = &mut self.documents[idx];
        doc.apply(fields);
        let updated = doc.clone();

        info!(id = %updated.id, "document updated");
        self.persist();

        Ok(updated)
    }

    /// Remove a document
    pub fn remove(&mut self, id: &str) -> StoreResult<()> {
        let idx = self.position(id).ok_or_else(|| StoreError::not_found(id))?;
        let removed = self.documents.remove(idx);

        info!(id = %removed.id, "document removed");
        self.persist();

        Ok(())
    }

    // ==================== Internals ====================

    fn position(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|d| d.id == id)
    }

    fn validate(&self, draft: DocumentDraft) -> StoreResult<ValidDraft> {
        let nombre = draft.nombre.trim();
        if nombre.is_empty() {
            return Err(StoreError::validation(Field::Nombre, "a name is required"));
        }
        let tipo = draft
            .tipo
            .ok_or_else(|| StoreError::validation(Field::Tipo, "a document type is required"))?;
        let categoria = draft
            .categoria
            .ok_or_else(|| StoreError::validation(Field::Categoria, "a category is required"))?;
        if !self.hierarchy.is_valid(categoria, &draft.subcategoria) {
            return Err(StoreError::validation(
                Field::Subcategoria,
                format!(
                    "'{}' is not a subcategory of '{}'",
                    draft.subcategoria, categoria
                ),
            ));
        }

        Ok(ValidDraft {
            nombre: nombre.to_string(),
            descripcion: draft.descripcion,
            tipo,
            estado: draft.estado,
            categoria,
            subcategoria: draft.subcategoria,
        })
    }

    /// Generate an id not used by any current document
    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Snapshot the whole collection; failures are logged, never returned
    fn persist(&self) {
        let blob = match serde_json::to_string(&self.documents) {
            Ok(blob) => blob,
            Err(e) => {
                error!(error = %e, "failed to serialize documents; changes kept in memory only");
                return;
            }
        };

        match self.persistence.save(STORAGE_KEY, &blob) {
            Ok(()) => debug!(count = self.documents.len(), "documents persisted"),
            Err(e) => error!(
                error = %e,
                suggestion = e.recovery_suggestion().unwrap_or(""),
                "failed to persist documents; changes kept in memory only"
            ),
        }
    }
}

/// Read the saved collection, falling back to empty on any problem
///
/// Only a blob that is not a JSON array is discarded whole. Records that do
/// not parse, break the hierarchy rule or repeat an id are dropped one by one
/// so the rest of the snapshot survives.
fn load_documents(persistence: &dyn PersistencePort, hierarchy: &CategoryHierarchy) -> Vec<Document> {
    let blob = match persistence.load(STORAGE_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("no saved documents; starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "failed to load documents; starting empty");
            return Vec::new();
        }
    };

    let records: Vec<serde_json::Value> = match serde_json::from_str(&blob) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "saved documents are malformed; starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| match serde_json::from_value::<Document>(record) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!(record = idx, error = %e, "dropping unreadable saved document");
                None
            }
        })
        .filter(|doc| {
            if !hierarchy.is_valid(doc.categoria, &doc.subcategoria) {
                warn!(
                    id = %doc.id,
                    categoria = %doc.categoria,
                    subcategoria = %doc.subcategoria,
                    "dropping saved document with invalid subcategory"
                );
                return false;
            }
            if !seen.insert(doc.id.clone()) {
                warn!(id = %doc.id, "dropping saved document with duplicate id");
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{self, FilterSpec};
    use crate::models::{Category, DocumentState, DocumentType};
    use crate::pagination;
    use crate::storage::MemoryPersistence;
    use tempfile::TempDir;

    fn open_memory() -> (DocumentStore, MemoryPersistence) {
        let port = MemoryPersistence::new();
        let store = DocumentStore::open(port.clone(), CategoryHierarchy::standard());
        (store, port)
    }

    fn acta(nombre: &str) -> DocumentDraft {
        DocumentDraft::new(nombre)
            .with_tipo(DocumentType::Pdf)
            .with_categoria(Category::Administrativo)
            .with_subcategoria("Acta")
            .with_estado(DocumentState::Activo)
    }

    fn assert_invariants(store: &DocumentStore) {
        let mut ids = HashSet::new();
        for doc in store.list() {
            assert!(
                doc.subcategoria.is_empty()
                    || store
                        .hierarchy()
                        .list_subcategories(doc.categoria)
                        .contains(&doc.subcategoria)
            );
            assert!(ids.insert(doc.id.clone()), "duplicate id {}", doc.id);
        }
    }

    #[test]
    fn test_create_assigns_id_and_timestamp() {
        let (mut store, port) = open_memory();
        assert!(store.is_empty());

        let before = Utc::now();
        let doc = store.create(acta("Acta 1")).unwrap();
        let after = Utc::now();

        assert!(!doc.id.is_empty());
        assert!(doc.fecha_subida >= before && doc.fecha_subida <= after);
        assert_eq!(doc.nombre, "Acta 1");
        assert_eq!(doc.subcategoria, "Acta");
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0], doc);
        assert_eq!(port.save_count(), 1);
    }

    #[test]
    fn test_create_ignores_draft_id() {
        let (mut store, _port) = open_memory();
        let doc = store.create(acta("Acta").with_id("chosen-by-caller")).unwrap();
        assert_ne!(doc.id, "chosen-by-caller");
    }

    #[test]
    fn test_create_rejects_foreign_subcategory() {
        let (mut store, port) = open_memory();
        store.create(acta("Acta 1")).unwrap();

        let err = store
            .create(acta("Factura mal clasificada").with_subcategoria("Factura"))
            .unwrap_err();

        assert_eq!(err.field(), Some(Field::Subcategoria));
        assert_eq!(store.len(), 1);
        assert_eq!(port.save_count(), 1);
    }

    #[test]
    fn test_create_requires_fields() {
        let (mut store, _port) = open_memory();

        let err = store.create(acta("   ")).unwrap_err();
        assert_eq!(err.field(), Some(Field::Nombre));

        let mut no_type = acta("Acta");
        no_type.tipo = None;
        assert_eq!(store.create(no_type).unwrap_err().field(), Some(Field::Tipo));

        let mut no_category = acta("Acta");
        no_category.categoria = None;
        assert_eq!(
            store.create(no_category).unwrap_err().field(),
            Some(Field::Categoria)
        );

        assert!(store.is_empty());
    }

    #[test]
    fn test_create_trims_name_and_allows_empty_subcategory() {
        let (mut store, _port) = open_memory();
        let doc = store.create(acta("  Circular 4  ").with_subcategoria("")).unwrap();
        assert_eq!(doc.nombre, "Circular 4");
        assert!(doc.subcategoria.is_empty());
    }

    #[test]
    fn test_update_preserves_id_and_timestamp() {
        let (mut store, _port) = open_memory();
        let original = store.create(acta("Acta 1")).unwrap();

        let mut draft = DocumentDraft::from(&original);
        draft.nombre = "Acta 1 revisada".to_string();
        draft.estado = DocumentState::Inactivo;
        let updated = store.update(draft).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.fecha_subida, original.fecha_subida);
        assert_eq!(store.list()[0].nombre, "Acta 1 revisada");
        assert_eq!(store.list()[0].estado, DocumentState::Inactivo);
        assert_eq!(store.list()[0].fecha_subida, original.fecha_subida);
    }

    #[test]
    fn test_update_can_move_category() {
        let (mut store, _port) = open_memory();
        let original = store.create(acta("Doc")).unwrap();

        let mut draft = DocumentDraft::from(&original);
        draft.set_categoria(Category::Legal);
        draft.subcategoria = "Contrato".to_string();
        let updated = store.update(draft).unwrap();

        assert_eq!(updated.categoria, Category::Legal);
        assert_eq!(updated.subcategoria, "Contrato");
        assert_invariants(&store);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (mut store, _port) = open_memory();
        let err = store.update(acta("Acta").with_id("missing")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "missing"));
    }

    #[test]
    fn test_update_without_id_is_validation_error() {
        let (mut store, _port) = open_memory();
        let err = store.update(acta("Acta")).unwrap_err();
        assert_eq!(err.field(), Some(Field::Id));
    }

    #[test]
    fn test_update_with_invalid_subcategory_leaves_document() {
        let (mut store, port) = open_memory();
        let original = store.create(acta("Acta 1")).unwrap();

        let mut draft = DocumentDraft::from(&original);
        draft.nombre = "Cambiado".to_string();
        draft.subcategoria = "Contrato".to_string();
        let err = store.update(draft).unwrap_err();

        assert_eq!(err.field(), Some(Field::Subcategoria));
        assert_eq!(store.list()[0], original);
        assert_eq!(port.save_count(), 1);
    }

    #[test]
    fn test_remove_then_remove_again() {
        let (mut store, _port) = open_memory();
        let doc = store.create(acta("Acta 1")).unwrap();

        store.remove(&doc.id).unwrap();
        assert!(store.is_empty());
        assert!(store.get(&doc.id).is_none());

        let err = store.remove(&doc.id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let (mut store, _port) = open_memory();
        let a = store.create(acta("A")).unwrap();
        let b = store.create(acta("B")).unwrap();
        let c = store.create(acta("C")).unwrap();

        store.remove(&b.id).unwrap();

        let ids: Vec<_> = store.list().iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn test_ids_are_distinct() {
        let (mut store, _port) = open_memory();
        for i in 0..50 {
            store.create(acta(&format!("Acta {}", i))).unwrap();
        }
        assert_eq!(store.len(), 50);
        assert_invariants(&store);
    }

    #[test]
    fn test_round_trip_through_fresh_store() {
        let port = MemoryPersistence::new();
        let mut store = DocumentStore::open(port.clone(), CategoryHierarchy::standard());
        store.create(acta("Acta 1")).unwrap();
        store
            .create(
                DocumentDraft::new("Presupuesto 2025")
                    .with_tipo(DocumentType::Word)
                    .with_categoria(Category::Financiero)
                    .with_subcategoria("Presupuesto")
                    .with_descripcion("Anual"),
            )
            .unwrap();
        let original = store.list().to_vec();

        let reopened = DocumentStore::open(port, CategoryHierarchy::standard());
        assert_eq!(reopened.list(), original.as_slice());
    }

    #[test]
    fn test_persistence_failure_is_swallowed() {
        let (mut store, port) = open_memory();
        port.set_failing(true);

        let doc = store.create(acta("Acta 1")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(port.save_count(), 0);
        assert!(port.get(STORAGE_KEY).is_none());

        store.remove(&doc.id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_next_successful_save_catches_up() {
        let (mut store, port) = open_memory();
        port.set_failing(true);
        store.create(acta("Perdido temporalmente")).unwrap();

        port.set_failing(false);
        store.create(acta("Acta 2")).unwrap();

        let reopened = DocumentStore::open(port, CategoryHierarchy::standard());
        assert_eq!(reopened.len(), 2);
    }

    #[test]
    fn test_malformed_snapshot_starts_empty() {
        let port = MemoryPersistence::new();
        port.insert(STORAGE_KEY, "{ this is not json");

        let mut store = DocumentStore::open(port.clone(), CategoryHierarchy::standard());
        assert!(store.is_empty());

        // The store stays usable and overwrites the bad snapshot
        store.create(acta("Acta 1")).unwrap();
        let saved: Vec<Document> = serde_json::from_str(&port.get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn test_load_failure_starts_empty() {
        let port = MemoryPersistence::new();
        port.insert(STORAGE_KEY, "[]");
        port.set_failing(true);

        let store = DocumentStore::open(port, CategoryHierarchy::standard());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_drops_invalid_records() {
        let port = MemoryPersistence::new();
        port.insert(
            STORAGE_KEY,
            r#"[
                {"id":"1","nombre":"Ok","descripcion":"","tipo":"PDF","fechaSubida":"2024-01-01T00:00:00Z","estado":"Activo","categoria":"Administrativo","subcategoria":"Acta"},
                {"id":"2","nombre":"Mal","descripcion":"","tipo":"PDF","fechaSubida":"2024-01-01T00:00:00Z","estado":"Activo","categoria":"Administrativo","subcategoria":"Factura"},
                {"id":"1","nombre":"Repetido","descripcion":"","tipo":"Word","fechaSubida":"2024-01-02T00:00:00Z","estado":"Activo","categoria":"Legal","subcategoria":""}
            ]"#,
        );

        let store = DocumentStore::open(port, CategoryHierarchy::standard());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].nombre, "Ok");
        assert_invariants(&store);
    }

    #[test]
    fn test_load_drops_unreadable_records_and_keeps_the_rest() {
        let port = MemoryPersistence::new();
        port.insert(
            STORAGE_KEY,
            r#"[
                {"id":"1","nombre":"Ok","descripcion":"","tipo":"PDF","fechaSubida":"2024-01-01T00:00:00Z","estado":"Activo","categoria":"Administrativo","subcategoria":"Acta"},
                {"id":"2","nombre":"Excel","descripcion":"","tipo":"Excel","fechaSubida":"2024-01-01T00:00:00Z","estado":"Activo","categoria":"Administrativo","subcategoria":"Acta"},
                {"id":"3","nombre":"Sin fecha","tipo":"PDF","categoria":"Legal"},
                42
            ]"#,
        );

        let mut store = DocumentStore::open(port.clone(), CategoryHierarchy::standard());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].nombre, "Ok");

        // The surviving record is written back with the next mutation
        store.create(acta("Nuevo")).unwrap();
        let saved: Vec<Document> =
            serde_json::from_str(&port.get(STORAGE_KEY).unwrap()).unwrap();
        let names: Vec<_> = saved.iter().map(|d| d.nombre.as_str()).collect();
        assert_eq!(names, vec!["Ok", "Nuevo"]);
    }

    #[test]
    fn test_custom_hierarchy_is_enforced() {
        let hierarchy = CategoryHierarchy::new([(Category::Legal, vec!["Tutela"])]);
        let mut store = DocumentStore::open(MemoryPersistence::new(), hierarchy);

        let tutela = DocumentDraft::new("Tutela 1")
            .with_tipo(DocumentType::Pdf)
            .with_categoria(Category::Legal)
            .with_subcategoria("Tutela");
        assert!(store.create(tutela).is_ok());

        let contrato = DocumentDraft::new("Contrato")
            .with_tipo(DocumentType::Pdf)
            .with_categoria(Category::Legal)
            .with_subcategoria("Contrato");
        assert!(store.create(contrato).is_err());
    }

    #[test]
    fn test_scenarios_a_to_d() {
        let (mut store, _port) = open_memory();

        // A: first document
        let a = store
            .create(
                DocumentDraft::new("Acta 1")
                    .with_tipo(DocumentType::Pdf)
                    .with_categoria(Category::Administrativo)
                    .with_subcategoria("Acta")
                    .with_estado(DocumentState::Activo)
                    .with_descripcion(""),
            )
            .unwrap();
        assert!(!a.id.is_empty());
        assert!((Utc::now() - a.fecha_subida).num_seconds().abs() < 5);
        assert_eq!(store.list().len(), 1);

        // B: Factura belongs to Financiero
        let err = store
            .create(acta("Otra").with_subcategoria("Factura"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
        assert_eq!(store.list().len(), 1);

        // C: rename keeps the upload time
        let mut draft = DocumentDraft::from(&a);
        draft.nombre = "Acta 1 revisada".to_string();
        store.update(draft).unwrap();
        assert_eq!(store.list()[0].nombre, "Acta 1 revisada");
        assert_eq!(store.list()[0].fecha_subida, a.fecha_subida);

        // D: delete twice
        store.remove(&a.id).unwrap();
        assert!(matches!(
            store.remove(&a.id),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_scenario_e_pagination_over_store() {
        let (mut store, _port) = open_memory();
        for i in 1..=12 {
            store.create(acta(&format!("Acta {}", i))).unwrap();
        }

        let page = pagination::window(store.list(), 5, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].nombre, "Acta 11");
        assert_eq!(page.items[1].nombre, "Acta 12");
        assert_eq!(page.page_count, 3);
        assert_eq!(page.effective_page_index, 2);
    }

    #[test]
    fn test_filter_then_paginate_after_deletes() {
        let (mut store, _port) = open_memory();
        let mut created = Vec::new();
        for i in 1..=8 {
            let draft = if i % 2 == 0 {
                acta(&format!("Acta {}", i))
            } else {
                DocumentDraft::new(format!("Factura {}", i))
                    .with_tipo(DocumentType::Imagen)
                    .with_categoria(Category::Financiero)
                    .with_subcategoria("Factura")
            };
            created.push(store.create(draft).unwrap());
        }

        let spec = FilterSpec::new().with_category(Category::Financiero);
        let visible = filter::apply(store.list(), &spec);
        let page = pagination::window(&visible, 3, 1);
        assert_eq!(page.items.len(), 1);
        let stale = page.effective_page_index;

        // Drop one Factura; page 1 no longer exists
        store.remove(&created[0].id).unwrap();
        let visible = filter::apply(store.list(), &spec);
        let page = pagination::window(&visible, 3, stale);
        assert_eq!(page.effective_page_index, 0);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_open_with_config_file_backend() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        };

        {
            let mut store = DocumentStore::open_with_config(&config).unwrap();
            store.create(acta("Persistente")).unwrap();
        }

        assert!(config.documents_path().exists());
        let store = DocumentStore::open_with_config(&config).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].nombre, "Persistente");
        assert!(store.backend().starts_with("file"));
    }

    #[test]
    fn test_open_with_config_sqlite_backend() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp_dir.path().to_path_buf(),
            storage: StorageBackend::Sqlite,
            ..Config::default()
        };

        {
            let mut store = DocumentStore::open_with_config(&config).unwrap();
            store.create(acta("En base de datos")).unwrap();
        }

        assert!(config.sqlite_path().exists());
        assert!(!config.documents_path().exists());
        let store = DocumentStore::open_with_config(&config).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.backend().starts_with("sqlite"));
    }
}
