use super::{DataStore, MAX_SNAPSHOTS};
use crate::errors::AppError;
use crate::models::AnalysisSnapshot;

/// Append a snapshot, evicting the oldest entries beyond the cap
pub fn record(store: &DataStore, snapshot: AnalysisSnapshot) -> Result<(), AppError> {
    store.write(|data| {
        data.snapshots.push(snapshot);
        if data.snapshots.len() > MAX_SNAPSHOTS {
            let excess = data.snapshots.len() - MAX_SNAPSHOTS;
            data.snapshots.drain(..excess);
        }
    })
}

/// All snapshots, most recent analysis first
pub fn all(store: &DataStore) -> Vec<AnalysisSnapshot> {
    let mut snapshots = store.read(|data| data.snapshots.clone());
    snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    snapshots
}

pub fn latest(store: &DataStore) -> Option<AnalysisSnapshot> {
    store.read(|data| data.snapshots.iter().max_by_key(|s| s.created_at).cloned())
}
