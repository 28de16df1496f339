//! Session state persistence
//!
//! A small subset of session state (`data`, `speed`, `algorithm`, and the
//! search `target` when set) is written under a fixed key on every change,
//! and read back once when a session starts. Persistence is best-effort:
//! a failed write is logged and skipped, and a missing, unreadable or
//! malformed record loads as "no persisted state". Nothing in this module
//! ever propagates an error to the playback layer.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::registry::Algorithm;

/// Fixed key the session record is stored under.
pub const STORAGE_KEY: &str = "algorithm-visualizer-state";

/// The persisted subset of session state. Any subset of fields may be
/// present; absent fields fall back to session defaults on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i32>,
}

/// Key-value persistence backend for session state.
///
/// Implementations must be infallible from the caller's point of view:
/// `save` swallows and logs failures, `load` answers `None` for anything
/// it cannot read back.
pub trait StateStore: Send + Sync {
    /// Serialize and write the record; fire-and-forget, last write wins.
    fn save(&self, state: &PersistedState);

    /// Read and deserialize the record, or `None` if it is missing or
    /// unusable.
    fn load(&self) -> Option<PersistedState>;
}

/// File-backed store: one JSON file named after [`STORAGE_KEY`] in the
/// given directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        FileStore {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// The file the record is kept in.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn save(&self, state: &PersistedState) {
        let json = match serde_json::to_string(state) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize session state, write skipped");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to persist session state, write skipped"
            );
        }
    }

    fn load(&self) -> Option<PersistedState> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) => {
                // Missing file is the common first-run case; anything else
                // is still just "no persisted state".
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "failed to read persisted session state"
                    );
                }
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::debug!(error = %err, "malformed persisted session state, ignoring");
                None
            }
        }
    }
}

/// In-memory store, for tests and for hosts without a writable filesystem.
///
/// Round-trips through JSON like [`FileStore`] so both stores accept and
/// reject exactly the same records.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn save(&self, state: &PersistedState) {
        match serde_json::to_string(state) {
            Ok(json) => *self.slot.lock() = Some(json),
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize session state, write skipped");
            }
        }
    }

    fn load(&self) -> Option<PersistedState> {
        let slot = self.slot.lock();
        let json = slot.as_deref()?;
        match serde_json::from_str(json) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::debug!(error = %err, "malformed persisted session state, ignoring");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_partial_records() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);

        let record = PersistedState {
            speed: Some(7),
            algorithm: Some(Algorithm::MergeSort),
            ..Default::default()
        };
        store.save(&record);
        assert_eq!(store.load(), Some(record));
    }

    #[test]
    fn algorithm_persists_as_registry_key() {
        let record = PersistedState {
            algorithm: Some(Algorithm::BubbleSort),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"algorithm":"bubbleSort"}"#);
    }

    #[test]
    fn malformed_record_loads_as_absent() {
        let store = MemoryStore::new();
        *store.slot.lock() = Some("{not json".to_string());
        assert_eq!(store.load(), None);

        *store.slot.lock() = Some(r#"{"speed":"fast"}"#.to_string());
        assert_eq!(store.load(), None);
    }
}
