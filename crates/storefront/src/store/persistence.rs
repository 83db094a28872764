//! Durable persistence for the store state.
//!
//! One durable record, keyed by the fixed `lumiere-storage` namespace,
//! holding the full serialized [`StoreState`]. The trait seam keeps the
//! state-transition logic independent of any storage backend.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use super::state::StoreState;

/// Errors from loading or saving the persisted state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the durable record failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized or deserialized.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Save/load contract for the store's durable state.
///
/// Implementations must be able to report "nothing persisted yet"
/// (`Ok(None)`) distinctly from a read failure.
pub trait StateStore: Send + Sync {
    /// Load the persisted state, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when a record exists but cannot be read
    /// or parsed; callers fall back to the seeded default in that case.
    fn load(&self) -> Result<Option<StoreState>, PersistenceError>;

    /// Persist the full state, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the record cannot be written. Save
    /// failures are surfaced as warnings by the store, never as a failed
    /// mutation.
    fn save(&self, state: &StoreState) -> Result<(), PersistenceError>;
}

/// JSON-file backend: the whole state as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a backend writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this backend reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<StoreState>, PersistenceError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, state: &StoreState) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory backend for tests.
///
/// Stores the serialized JSON rather than the value itself so tests
/// exercise the same round-trip a file backend would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load the backend with a raw record (possibly corrupt).
    #[must_use]
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
        }
    }

    /// The raw persisted record, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn record(&self) -> Option<String> {
        self.record.lock().expect("record lock poisoned").clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<StoreState>, PersistenceError> {
        let guard = self.record.lock().expect("record lock poisoned");
        match guard.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &StoreState) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(state)?;
        *self.record.lock().expect("record lock poisoned") = Some(raw);
        Ok(())
    }
}
