// src/persistence.rs

//! The arena's only boundary with the outside world: saving and loading
//! [`ArenaSnapshot`] blobs by key. Failures here are reported upward and
//! never disturb the in-memory simulator.

use crate::arena::ArenaSimulator;
use crate::types::snapshot::ArenaSnapshot;
use log::{info, warn};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot store I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Keyed snapshot persistence. `save` is an idempotent upsert; `load` of an
/// unknown key is `Ok(None)`, which callers treat the same as a fresh reset.
pub trait SnapshotStore {
    fn load(&self, key: &str) -> Result<Option<ArenaSnapshot>, StoreError>;
    fn save(&mut self, key: &str, snapshot: &ArenaSnapshot) -> Result<(), StoreError>;
}

/// In-memory store holding serialized blobs. The test fake, and the model
/// the round-trip contract is specified against.
#[derive(Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<ArenaSnapshot>, StoreError> {
        match self.blobs.get(key) {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, snapshot: &ArenaSnapshot) -> Result<(), StoreError> {
        let blob = serde_json::to_string(snapshot)?;
        self.blobs.insert(key.to_string(), blob);
        Ok(())
    }
}

/// One pretty-printed JSON file per key under a root directory.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<ArenaSnapshot>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, snapshot: &ArenaSnapshot) -> Result<(), StoreError> {
        let blob = serde_json::to_string_pretty(snapshot)?;
        fs::write(self.path_for(key), blob)?;
        Ok(())
    }
}

/// Loads `key` from `store`, degrading to a freshly reset arena when the
/// snapshot is absent or the load fails. A failed load is logged and
/// swallowed here; it must never surface as a crash in the simulation loop.
pub fn load_or_default(store: &dyn SnapshotStore, key: &str) -> ArenaSimulator {
    match store.load(key) {
        Ok(Some(snapshot)) => {
            info!("resuming arena from snapshot '{key}'");
            ArenaSimulator::from_snapshot(snapshot)
        }
        Ok(None) => ArenaSimulator::new(),
        Err(err) => {
            warn!("failed to load arena snapshot '{key}': {err}; starting fresh");
            ArenaSimulator::new()
        }
    }
}
