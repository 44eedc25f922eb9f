//! Persistence port and the JSON file backend
//!
//! The document store snapshots its whole collection through a
//! [`PersistencePort`]: a key-value boundary that reads and writes one
//! serialized blob per key. Backends decide where the bytes live.
//!
//! `FilePersistence` keeps each key in `<data_dir>/<key>.json` and uses atomic
//! writes (write to temp file, then rename) to prevent corruption.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{PersistenceError, PersistenceResult};

/// Durable key-value boundary used by the document store
pub trait PersistencePort {
    /// Read the blob stored under `key`, `None` if nothing was saved yet
    fn load(&self, key: &str) -> PersistenceResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn save(&self, key: &str, blob: &str) -> PersistenceResult<()>;

    /// Short backend name for status output
    fn describe(&self) -> String;
}

impl<P: PersistencePort + ?Sized> PersistencePort for Box<P> {
    fn load(&self, key: &str) -> PersistenceResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &str) -> PersistenceResult<()> {
        (**self).save(key, blob)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// File-per-key backend rooted at a data directory
#[derive(Debug, Clone)]
pub struct FilePersistence {
    root: PathBuf,
}

impl FilePersistence {
    /// Create a file backend storing keys under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PersistenceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl PersistencePort for FilePersistence {
    fn load(&self, key: &str) -> PersistenceResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "loaded snapshot");
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::ReadError { path, source: e }),
        }
    }

    fn save(&self, key: &str, blob: &str) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        atomic_write(&path, blob.as_bytes())?;
        debug!(path = %path.display(), bytes = blob.len(), "saved snapshot");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file ({})", self.root.display())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
pub(crate) fn atomic_write(path: &Path, data: &[u8]) -> PersistenceResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| PersistenceError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| PersistenceError::from_io(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| PersistenceError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
