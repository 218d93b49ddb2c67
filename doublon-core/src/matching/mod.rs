//! Duplicate Matching
//!
//! The pure computation pipeline: field normalization, edit-distance
//! similarity, pairwise scoring, and grouping of a full record set.

pub mod distance;
pub mod grouper;
pub mod normalize;
pub mod scorer;

pub use distance::{levenshtein, similarity};
pub use grouper::{group_duplicates, DuplicateGroup, GroupingStrategy};
pub use normalize::{normalize_email, normalize_name, normalize_phone};
pub use scorer::{score_pair, MatchConfig, MatchReason, MatchResult};
