//! Registro Core Library
//!
//! This crate provides the document state core for Registro, a registry of
//! classified documents (metadata only).
//!
//! # Architecture
//!
//! - **DocumentStore**: sole owner and writer of the document collection
//! - **CategoryHierarchy**: fixed category -> subcategory taxonomy
//! - **filter / pagination**: pure functions over read-only snapshots
//! - **storage**: persistence port with file, SQLite and in-memory backends
//!
//! Callers read `store.list()`, narrow it with `filter::apply`, and cut a
//! page with `pagination::window`. Mutations go through the store, which
//! persists the whole collection after each one.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = DocumentStore::open_with_config(&Config::load()?)?;
//!
//! let draft = DocumentDraft::new("Acta 1")
//!     .with_tipo(DocumentType::Pdf)
//!     .with_categoria(Category::Administrativo)
//!     .with_subcategoria("Acta");
//! let doc = store.create(draft)?;
//!
//! let spec = FilterSpec::new().with_category(Category::Administrativo);
//! let visible = filter::apply(store.list(), &spec);
//! let page = pagination::window(&visible, 5, 0);
//! ```
//!
//! # Modules
//!
//! - `store`: document store (main entry point)
//! - `models`: documents, drafts, and their enumerations
//! - `hierarchy`: category taxonomy
//! - `filter`: filter specs
//! - `pagination`: page windows
//! - `storage`: persistence backends
//! - `config`: application configuration

pub mod config;
pub mod error;
pub mod filter;
pub mod hierarchy;
pub mod models;
pub mod pagination;
pub mod storage;
pub mod store;

pub use config::{Config, StorageBackend};
pub use error::{Field, StoreError, StoreResult};
pub use filter::FilterSpec;
pub use hierarchy::CategoryHierarchy;
pub use models::{Category, Document, DocumentDraft, DocumentState, DocumentType, ParseEnumError};
pub use pagination::{Page, DEFAULT_PAGE_SIZE};
pub use storage::{
    FilePersistence, MemoryPersistence, PersistenceError, PersistencePort, SqlitePersistence,
};
pub use store::{DocumentStore, STORAGE_KEY};
