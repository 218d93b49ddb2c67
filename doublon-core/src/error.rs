//! Error Types
//!
//! Unified error type for the deduplication workflow.

use thiserror::Error;

use crate::store::StoreError;

/// Unified error type for Doublon operations.
#[derive(Error, Debug)]
pub enum DedupError {
    /// The external record store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// No grouping pass has been run yet.
    #[error("duplicate analysis has not been run")]
    NotAnalyzed,

    /// No active group matches the given ID or prefix.
    #[error("duplicate group not found: {0}")]
    GroupNotFound(String),

    /// The record is not a member of the group.
    #[error("record {record_id} is not a member of group {group_id}")]
    RecordNotInGroup {
        /// The group that was addressed.
        group_id: String,
        /// The record that is not a member.
        record_id: String,
    },
}

/// Result type for Doublon operations.
pub type DedupResult<T> = Result<T, DedupError>;
