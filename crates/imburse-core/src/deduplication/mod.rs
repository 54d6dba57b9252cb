//! Duplicate detection for content records
//!
//! This module provides similarity scoring and pairwise matching functions
//! to identify likely duplicate records, with human-readable reasons, plus
//! grouping of matches for review.

mod detector;
mod similarity;

pub use detector::{
    detect_duplicates, find_duplicate_groups, DuplicateCandidate, DuplicateGroup,
    CONTENT_PREFIX_CHARS, DEFAULT_THRESHOLD,
};
pub use similarity::text_similarity;
