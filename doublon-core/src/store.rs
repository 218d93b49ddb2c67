// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Record Store Boundary
//!
//! The core does not own contact records - an external store supplies them
//! and performs the actual merge. [`RecordStore`] is that boundary. Field
//! reconciliation policy during a merge belongs to the store, not to this
//! crate.

use std::sync::Mutex;

use thiserror::Error;

use crate::record::ContactRecord;

/// Errors from the external record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Loading the record set failed.
    #[error("record load failed: {0}")]
    Load(String),

    /// Merging records failed. No partial state is assumed; the caller
    /// keeps the group available for retry.
    #[error("merge failed: {0}")]
    Merge(String),
}

/// External persistence collaborator.
///
/// `load_records` must return records with stable, unique IDs. A merge
/// call blocks until the store reports success or failure; there is no
/// cancellation, the recovery path is a manual re-trigger.
pub trait RecordStore {
    /// Read-only fetch of the full candidate set.
    fn load_records(&self) -> Result<Vec<ContactRecord>, StoreError>;

    /// Merges `duplicate_ids` into the record identified by `primary_id`.
    fn merge_records(&self, primary_id: &str, duplicate_ids: &[String]) -> Result<(), StoreError>;
}

/// In-memory store for tests, demos and embedders without persistence.
///
/// Merging keeps the primary record untouched and drops the duplicates;
/// anything smarter is a real store's job. Failure injection mimics a
/// collaborator outage.
pub struct MemoryStore {
    records: Mutex<Vec<ContactRecord>>,
    fail_loads: Mutex<bool>,
    fail_merges: Mutex<bool>,
}

impl MemoryStore {
    /// Creates a store seeded with `records`.
    pub fn new(records: Vec<ContactRecord>) -> Self {
        MemoryStore {
            records: Mutex::new(records),
            fail_loads: Mutex::new(false),
            fail_merges: Mutex::new(false),
        }
    }

    /// Makes subsequent `load_records` calls fail.
    pub fn set_fail_loads(&self, fail: bool) {
        *self.fail_loads.lock().unwrap() = fail;
    }

    /// Makes subsequent `merge_records` calls fail.
    pub fn set_fail_merges(&self, fail: bool) {
        *self.fail_merges.lock().unwrap() = fail;
    }

    /// Replaces the stored record set.
    pub fn set_records(&self, records: Vec<ContactRecord>) {
        *self.records.lock().unwrap() = records;
    }

    /// Returns a snapshot of the stored records.
    pub fn records(&self) -> Vec<ContactRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl RecordStore for MemoryStore {
    fn load_records(&self) -> Result<Vec<ContactRecord>, StoreError> {
        if *self.fail_loads.lock().unwrap() {
            return Err(StoreError::Load("injected load failure".to_string()));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    fn merge_records(&self, primary_id: &str, duplicate_ids: &[String]) -> Result<(), StoreError> {
        if *self.fail_merges.lock().unwrap() {
            return Err(StoreError::Merge("injected merge failure".to_string()));
        }

        let mut records = self.records.lock().unwrap();

        if !records.iter().any(|r| r.id() == primary_id) {
            return Err(StoreError::Merge(format!(
                "primary record {} not found",
                primary_id
            )));
        }
        for id in duplicate_ids {
            if !records.iter().any(|r| r.id() == id) {
                return Err(StoreError::Merge(format!("record {} not found", id)));
            }
        }

        records.retain(|r| !duplicate_ids.iter().any(|id| id == r.id()));
        Ok(())
    }
}
