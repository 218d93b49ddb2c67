//! JSON File Store
//!
//! A [`RecordStore`] over a plain JSON file, standing in for the CRM
//! backend. The merge reconciliation policy lives here, not in the core:
//! the primary record survives, its missing optional fields are backfilled
//! from the duplicates in group order, and the duplicates are dropped.

use std::fs;
use std::path::PathBuf;

use doublon_core::{ContactRecord, DuplicateGroup, RecordStore, StoreError};
use serde::{Deserialize, Serialize};

/// Record store backed by a JSON array file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given records file.
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }
}

impl RecordStore for JsonFileStore {
    fn load_records(&self) -> Result<Vec<ContactRecord>, StoreError> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Load(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| StoreError::Load(format!("{}: {}", self.path.display(), e)))
    }

    fn merge_records(&self, primary_id: &str, duplicate_ids: &[String]) -> Result<(), StoreError> {
        let records = self.load_records().map_err(|e| match e {
            StoreError::Load(msg) => StoreError::Merge(msg),
            other => other,
        })?;

        let primary = records
            .iter()
            .find(|r| r.id() == primary_id)
            .ok_or_else(|| StoreError::Merge(format!("primary record {} not found", primary_id)))?;

        let duplicates: Vec<&ContactRecord> = duplicate_ids
            .iter()
            .map(|id| {
                records
                    .iter()
                    .find(|r| r.id() == id)
                    .ok_or_else(|| StoreError::Merge(format!("record {} not found", id)))
            })
            .collect::<Result<_, _>>()?;

        let merged = backfill(primary, &duplicates);

        let updated: Vec<ContactRecord> = records
            .iter()
            .filter(|r| !duplicate_ids.iter().any(|id| id == r.id()))
            .map(|r| {
                if r.id() == primary_id {
                    merged.clone()
                } else {
                    r.clone()
                }
            })
            .collect();

        let json = serde_json::to_string_pretty(&updated)
            .map_err(|e| StoreError::Merge(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| StoreError::Merge(format!("{}: {}", self.path.display(), e)))
    }
}

/// Fills the primary's missing optional fields from the duplicates,
/// first non-empty value wins.
fn backfill(primary: &ContactRecord, duplicates: &[&ContactRecord]) -> ContactRecord {
    let pick = |own: Option<&str>, from: fn(&ContactRecord) -> Option<&str>| -> Option<String> {
        own.map(str::to_string)
            .or_else(|| duplicates.iter().find_map(|d| from(d).map(str::to_string)))
    };

    let email = pick(primary.email(), ContactRecord::email);
    let phone = pick(primary.phone(), ContactRecord::phone);
    let company = pick(primary.company(), ContactRecord::company);
    let role = pick(primary.role(), ContactRecord::role);
    let photo_url = pick(primary.photo_url(), ContactRecord::photo_url);

    let mut merged =
        ContactRecord::new(primary.id(), primary.first_name(), primary.last_name());
    if let Some(v) = email {
        merged = merged.with_email(&v);
    }
    if let Some(v) = phone {
        merged = merged.with_phone(&v);
    }
    if let Some(v) = company {
        merged = merged.with_company(&v);
    }
    if let Some(v) = role {
        merged = merged.with_role(&v);
    }
    if let Some(v) = photo_url {
        merged = merged.with_photo_url(&v);
    }
    merged
}

/// Persisted scan session: the active duplicate groups.
#[derive(Serialize, Deserialize)]
pub struct SessionFile {
    /// Active groups, still sorted by score descending.
    pub groups: Vec<DuplicateGroup>,
}

impl SessionFile {
    /// Loads a session file if one exists.
    pub fn load(path: &PathBuf) -> anyhow::Result<Option<SessionFile>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Writes the session file, creating the parent directory.
    pub fn save(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
