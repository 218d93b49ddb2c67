//! Doublon Core Library
//!
//! CRM contact record deduplication: field normalization, similarity
//! scoring, duplicate grouping, and a merge/dismiss resolution workflow.

pub mod error;
pub mod events;
pub mod matching;
pub mod record;
pub mod session;
pub mod store;

pub use error::{DedupError, DedupResult};
pub use events::{CallbackHandler, DedupEvent, EventDispatcher, EventHandler};
pub use matching::{
    group_duplicates, levenshtein, normalize_email, normalize_name, normalize_phone, score_pair,
    similarity, DuplicateGroup, GroupingStrategy, MatchConfig, MatchReason, MatchResult,
};
pub use record::ContactRecord;
pub use session::DedupSession;
pub use store::{MemoryStore, RecordStore, StoreError};
