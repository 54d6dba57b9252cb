//! Duplicate detection and merge engine for the imburse personal content manager
//!
//! The engine is pure computation over in-memory records: callers load the
//! record set, ask for ranked duplicate candidates (each carrying the
//! reasons the pair matched), and later apply a policy-driven merge of a
//! confirmed pair. Fetching, persistence, and scheduling belong to the app
//! layers that call in.

pub mod deduplication;
pub mod merge;

pub use deduplication::{
    detect_duplicates, find_duplicate_groups, text_similarity, DuplicateCandidate,
    DuplicateGroup, CONTENT_PREFIX_CHARS, DEFAULT_THRESHOLD,
};
pub use merge::{
    merge_content_items, propose_merge, MergeError, MergePolicy, MergeProposal, MergeResult,
};

// Domain types callers pass in
pub use imburse_domain::{ContentKind, ContentRecord};
