//! In-memory backend
//!
//! A cloneable handle over a shared map. Clones see the same data, so a test
//! can hand one clone to a store and inspect or corrupt the blob through
//! another. `set_failing(true)` makes every call return an error.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::error::{PersistenceError, PersistenceResult};
use super::persistence::PersistencePort;

#[derive(Debug, Default)]
struct Inner {
    entries: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
    saves: Cell<usize>,
}

/// Shared in-memory persistence port
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    inner: Rc<Inner>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent load/save fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.set(failing);
    }

    /// Store a raw blob, bypassing the failure switch
    pub fn insert(&self, key: &str, blob: impl Into<String>) {
        self.inner
            .entries
            .borrow_mut()
            .insert(key.to_string(), blob.into());
    }

    /// Read a raw blob, bypassing the failure switch
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.entries.borrow().get(key).cloned()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.inner.saves.get()
    }

    fn check(&self) -> PersistenceResult<()> {
        if self.inner.failing.get() {
            return Err(PersistenceError::Unavailable(
                "in-memory backend set to fail".to_string(),
            ));
        }
        Ok(())
    }
}

impl PersistencePort for MemoryPersistence {
    fn load(&self, key: &str) -> PersistenceResult<Option<String>> {
        self.check()?;
        Ok(self.get(key))
    }

    fn save(&self, key: &str, blob: &str) -> PersistenceResult<()> {
        self.check()?;
        self.insert(key, blob);
        self.inner.saves.set(self.inner.saves.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
