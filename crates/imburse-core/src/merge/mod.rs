//! Merge policy and resolution for duplicate content records

use imburse_domain::{ContentKind, ContentRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flags controlling how two records merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePolicy {
    /// Keep the primary record's title (otherwise take the duplicate's).
    pub keep_primary_title: bool,
    /// Concatenate both bodies instead of keeping one.
    pub combine_content: bool,
    /// Union both tag lists instead of keeping one.
    pub merge_tags: bool,
    /// Currently has no effect: category always resolves primary-first.
    pub merge_categories: bool,
}

impl Default for MergePolicy {
    fn default() -> Self {
        MergePolicy {
            keep_primary_title: true,
            combine_content: false,
            merge_tags: true,
            merge_categories: true,
        }
    }
}

/// Fields the merge decided; the caller applies them to the primary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeResult {
    pub title: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    // Passthroughs from the primary record
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub is_public: bool,
    pub status: Option<String>,
}

/// Failure modes when resolving a merge request against a record slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("record not found: {0}")]
    RecordNotFound(String),
    #[error("cannot merge a record with itself: {0}")]
    SelfMerge(String),
}

/// A resolved merge the caller can apply: update the record with id
/// `primary_id` using `merged`, then delete the record with id `remove_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeProposal {
    pub primary_id: String,
    pub remove_id: String,
    pub merged: MergeResult,
}

/// Merge `duplicate` into `primary` under `policy`.
///
/// Pure field resolution: the primary record wins wherever the policy does
/// not say otherwise, and nothing validates that the two records are
/// actually compatible. Persisting the result and deleting the duplicate
/// stay with the caller.
pub fn merge_content_items(
    primary: &ContentRecord,
    duplicate: &ContentRecord,
    policy: MergePolicy,
) -> MergeResult {
    let title = if policy.keep_primary_title {
        primary.title.clone()
    } else {
        duplicate.title.clone()
    };

    let content = if policy.combine_content {
        match (&primary.content, &duplicate.content) {
            (Some(own), Some(other)) => Some(format!("{}\n\n---\n\n{}", own, other)),
            _ => primary.content.clone().or_else(|| duplicate.content.clone()),
        }
    } else {
        primary.content.clone().or_else(|| duplicate.content.clone())
    };

    let tags = if policy.merge_tags {
        // Union, first occurrence wins
        let mut tags: Vec<String> = Vec::new();
        for tag in primary.tags.iter().chain(duplicate.tags.iter()) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    } else if !primary.tags.is_empty() {
        primary.tags.clone()
    } else {
        duplicate.tags.clone()
    };

    // `merge_categories` is not consulted: category always resolves
    // primary-first (see MergePolicy)
    let category = primary
        .category
        .clone()
        .or_else(|| duplicate.category.clone());

    MergeResult {
        title,
        content,
        tags,
        category,
        kind: primary.kind,
        is_public: primary.is_public,
        status: primary.status.clone(),
    }
}

/// Resolve `primary_id` and `duplicate_id` in `records` and merge them.
pub fn propose_merge(
    records: &[ContentRecord],
    primary_id: &str,
    duplicate_id: &str,
    policy: MergePolicy,
) -> Result<MergeProposal, MergeError> {
    if primary_id == duplicate_id {
        return Err(MergeError::SelfMerge(primary_id.to_string()));
    }

    let primary = find_record(records, primary_id)?;
    let duplicate = find_record(records, duplicate_id)?;

    Ok(MergeProposal {
        primary_id: primary.id.clone(),
        remove_id: duplicate.id.clone(),
        merged: merge_content_items(primary, duplicate, policy),
    })
}

fn find_record<'a>(
    records: &'a [ContentRecord],
    id: &str,
) -> Result<&'a ContentRecord, MergeError> {
    records
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| MergeError::RecordNotFound(id.to_string()))
}
