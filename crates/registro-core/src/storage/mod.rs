//! Storage layer
//!
//! Persistence backends behind the [`PersistencePort`] trait.
//!
//! ## Backends
//!
//! - **File**: one JSON file per key, written atomically (default)
//! - **SQLite**: one row per key in a small key-value table
//! - **Memory**: shared map, used by tests and embedders
//!
//! The document store writes its full collection as a JSON array under a
//! single key after every successful mutation.

pub mod error;
pub mod memory;
pub mod persistence;
pub mod schema;
pub mod sqlite;

pub use error::{PersistenceError, PersistenceResult};
pub use memory::MemoryPersistence;
pub use persistence::{FilePersistence, PersistencePort};
pub use schema::{init_schema, needs_init, SCHEMA_VERSION};
pub use sqlite::SqlitePersistence;
