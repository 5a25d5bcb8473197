pub mod investments;
pub mod sales;
pub mod snapshots;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{AnalysisSnapshot, Investment, SalesRecord};

/// Retained analysis snapshots; inserting past the cap evicts the oldest
pub const MAX_SNAPSHOTS: usize = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    pub investments: Vec<Investment>,
    pub sales: Vec<SalesRecord>,
    pub snapshots: Vec<AnalysisSnapshot>,
}

/// Single-file JSON document store, shared across handlers via `Clone`
#[derive(Clone)]
pub struct DataStore {
    data: Arc<RwLock<StoreData>>,
    path: Option<PathBuf>,
}

impl DataStore {
    /// Load the document at `path`, or start empty when the file is absent
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let data: StoreData = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            StoreData::default()
        };
        info!(
            "Opened data store at {} ({} investments, {} sales records, {} snapshots)",
            path.display(),
            data.investments.len(),
            data.sales.len(),
            data.snapshots.len()
        );
        Ok(Self { data: Arc::new(RwLock::new(data)), path: Some(path) })
    }

    /// Volatile store for tests and ephemeral runs
    pub fn in_memory() -> Self {
        Self { data: Arc::new(RwLock::new(StoreData::default())), path: None }
    }

    pub(crate) fn read<T>(&self, f: impl FnOnce(&StoreData) -> T) -> T {
        f(&self.data.read())
    }

    /// Apply a mutation to a copy of the document and commit the copy only
    /// once it has been persisted, so a failed write leaves the in-memory
    /// state untouched. The disk write is synchronous and runs under the
    /// lock; the whole document is one small JSON file.
    pub(crate) fn write<T>(&self, f: impl FnOnce(&mut StoreData) -> T) -> Result<T, AppError> {
        let mut guard = self.data.write();
        let mut staged = guard.clone();
        let out = f(&mut staged);
        self.persist(&staged)?;
        *guard = staged;
        Ok(out)
    }

    /// Temp-sibling write plus rename; a crash mid-write cannot leave a
    /// truncated document at `path`
    fn persist(&self, data: &StoreData) -> Result<(), AppError> {
        if let Some(path) = &self.path {
            let raw = serde_json::to_string_pretty(data)?;
            let tmp = path.with_extension("json.tmp");
            if let Err(err) = std::fs::write(&tmp, raw).and_then(|()| std::fs::rename(&tmp, path)) {
                let _ = std::fs::remove_file(&tmp);
                return Err(err.into());
            }
        }
        Ok(())
    }
}
