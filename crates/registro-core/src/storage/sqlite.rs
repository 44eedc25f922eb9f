//! SQLite key-value backend
//!
//! Stores each snapshot blob as a row of the `kv_store` table. Useful when the
//! data directory already hosts other SQLite tooling or when a single-file
//! database is preferred over loose JSON files.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::error::{PersistenceError, PersistenceResult};
use super::persistence::PersistencePort;
use super::schema::{init_schema, needs_init};

/// Persistence port backed by a SQLite database
pub struct SqlitePersistence {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqlitePersistence {
    /// Open or create the database at `path`
    pub fn open(path: impl AsRef<Path>) -> PersistenceResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PersistenceError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        Self::with_connection(conn, Some(path.to_path_buf()))
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> PersistenceResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, None)
    }

    fn with_connection(conn: Connection, path: Option<PathBuf>) -> PersistenceResult<Self> {
        if needs_init(&conn) {
            init_schema(&conn)?;
        }
        Ok(Self { conn, path })
    }
}

impl PersistencePort for SqlitePersistence {
    fn load(&self, key: &str) -> PersistenceResult<Option<String>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        debug!(key, found = value.is_some(), "loaded snapshot from sqlite");
        Ok(value)
    }

    fn save(&self, key: &str, blob: &str) -> PersistenceResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, blob, Utc::now().to_rfc3339()],
        )?;
        debug!(key, bytes = blob.len(), "saved snapshot to sqlite");
        Ok(())
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => format!("sqlite ({})", path.display()),
            None => "sqlite (in-memory)".to_string(),
        }
    }
}
