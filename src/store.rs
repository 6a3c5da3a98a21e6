use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::loader::{self, LoadError};
use crate::data::model::Table;
use crate::data::summary::{self, TableSummary};

// ---------------------------------------------------------------------------
// DatasetId – opaque handle to a loaded dataset
// ---------------------------------------------------------------------------

/// Opaque identifier returned by [`DatasetStore::load`] and passed back in
/// by the host when building charts, so no implicit "most recent upload"
/// lookup exists anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(u64);

// ---------------------------------------------------------------------------
// DatasetStore – arena of loaded tables
// ---------------------------------------------------------------------------

/// Owns every loaded table, keyed by monotonically increasing ids.
/// Uploads are retained until the store is dropped; eviction is the host's
/// policy.
#[derive(Debug, Default)]
pub struct DatasetStore {
    datasets: BTreeMap<DatasetId, Table>,
    next_id: u64,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and register an uploaded dataset.  Returns its handle and the
    /// structural summary the host displays after an upload.
    pub fn load(
        &mut self,
        bytes: &[u8],
        extension: &str,
    ) -> Result<(DatasetId, TableSummary), LoadError> {
        let table = loader::load(bytes, extension)?;
        let info = summary::summarize(&table);
        let id = self.insert(table);
        log::info!(
            "dataset {}: {} rows x {} columns",
            id.0,
            info.rows,
            info.columns
        );
        Ok((id, info))
    }

    /// Register an already-parsed table.
    pub fn insert(&mut self, table: Table) -> DatasetId {
        let id = DatasetId(self.next_id);
        self.next_id += 1;
        self.datasets.insert(id, table);
        id
    }

    /// Look up a dataset by handle.
    pub fn get(&self, id: DatasetId) -> Option<&Table> {
        self.datasets.get(&id)
    }

    /// Handle of the most recently loaded dataset, if any.
    pub fn latest(&self) -> Option<DatasetId> {
        self.datasets.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_distinct_ids_and_keeps_both_tables() {
        let mut store = DatasetStore::new();
        let (first, info) = store.load(b"a\n1\n", "csv").unwrap();
        let (second, _) = store.load(b"b\n2\n3\n", "csv").unwrap();

        assert_ne!(first, second);
        assert_eq!(info.rows, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(first).unwrap().row_count(), 1);
        assert_eq!(store.get(second).unwrap().row_count(), 2);
    }

    #[test]
    fn latest_tracks_the_newest_upload() {
        let mut store = DatasetStore::new();
        assert_eq!(store.latest(), None);

        let (first, _) = store.load(b"a\n1\n", "csv").unwrap();
        assert_eq!(store.latest(), Some(first));

        let (second, _) = store.load(b"a\n1\n", "csv").unwrap();
        assert_eq!(store.latest(), Some(second));
    }

    #[test]
    fn failed_loads_register_nothing() {
        let mut store = DatasetStore::new();
        assert!(store.load(b"a\n1\n", "pdf").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn ids_serialize_transparently() {
        let mut store = DatasetStore::new();
        let (id, _) = store.load(b"a\n1\n", "csv").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let back: DatasetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
