//! Pairwise duplicate detection over content records

use std::collections::HashSet;

use imburse_domain::ContentRecord;
use serde::{Deserialize, Serialize};

use super::similarity::text_similarity;

/// Default aggregate-score threshold for candidate pairs.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Number of leading content characters compared by the content signal.
///
/// Bounds the edit-distance cost per pair; bodies that diverge only past
/// this prefix still count as similar content.
pub const CONTENT_PREFIX_CHARS: usize = 200;

/// A pair of records flagged as likely duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateCandidate {
    /// Id of the record appearing first in the input slice.
    pub item1_id: String,
    /// Id of the later record.
    pub item2_id: String,
    /// Aggregate similarity (0.0 to 1.0).
    pub similarity: f64,
    /// Human-readable explanations, one per matching signal.
    pub reasons: Vec<String>,
}

/// Records clustered as duplicates of the group's first member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub record_ids: Vec<String>,
    pub confidence: f64,
}

/// Accumulator of (score, weight) pairs from the signals that fired.
struct SignalTally {
    weighted_sum: f64,
    weight_sum: f64,
    reasons: Vec<String>,
}

impl SignalTally {
    fn new() -> Self {
        SignalTally {
            weighted_sum: 0.0,
            weight_sum: 0.0,
            reasons: Vec::new(),
        }
    }

    fn add(&mut self, score: f64, weight: f64, reason: String) {
        self.weighted_sum += score * weight;
        self.weight_sum += weight;
        self.reasons.push(reason);
    }

    /// Weighted average of the recorded signals; 0.0 when none fired.
    fn aggregate(&self) -> f64 {
        if self.weight_sum == 0.0 {
            return 0.0;
        }
        // Cap at 1.0
        (self.weighted_sum / self.weight_sum).min(1.0)
    }
}

fn percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

/// Score one same-kind pair against the four signals.
///
/// Returns the weighted aggregate plus one reason per signal that fired, or
/// `None` when the kinds differ or no signal fired.
fn score_pair(a: &ContentRecord, b: &ContentRecord) -> Option<(f64, Vec<String>)> {
    if a.kind != b.kind {
        return None;
    }

    let mut tally = SignalTally::new();

    // Title similarity
    let title_sim = text_similarity(&a.title, &b.title);
    if title_sim > 0.7 {
        tally.add(
            title_sim,
            0.5,
            format!("Titles are {}% similar", percent(title_sim)),
        );
    }

    // Content similarity, over a bounded prefix of each body
    if let (Some(content_a), Some(content_b)) = (&a.content, &b.content) {
        let prefix_a: String = content_a.chars().take(CONTENT_PREFIX_CHARS).collect();
        let prefix_b: String = content_b.chars().take(CONTENT_PREFIX_CHARS).collect();
        let content_sim = text_similarity(&prefix_a, &prefix_b);
        if content_sim > 0.65 {
            tally.add(
                content_sim,
                0.5,
                format!("Content is {}% similar", percent(content_sim)),
            );
        }
    }

    // Category match
    if let (Some(category_a), Some(category_b)) = (&a.category, &b.category) {
        if category_a == category_b {
            tally.add(0.1, 0.1, "Same category".to_string());
        }
    }

    // Tag overlap
    let tags_a: HashSet<&str> = a.tags.iter().map(String::as_str).collect();
    let tags_b: HashSet<&str> = b.tags.iter().map(String::as_str).collect();
    let common = tags_a.intersection(&tags_b).count();
    if common > 0 {
        let noun = if common == 1 { "tag" } else { "tags" };
        tally.add(0.1, 0.1, format!("{} common {}", common, noun));
    }

    if tally.reasons.is_empty() {
        return None;
    }
    Some((tally.aggregate(), tally.reasons))
}

/// Scan `records` for likely duplicate pairs.
///
/// Every unordered pair of same-kind records is scored against four signals
/// (title, content prefix, category, tag overlap); pairs whose weighted
/// aggregate reaches `threshold` and that matched at least one signal are
/// returned sorted by descending similarity. `DEFAULT_THRESHOLD` is the
/// usual choice for `threshold`.
pub fn detect_duplicates(records: &[ContentRecord], threshold: f64) -> Vec<DuplicateCandidate> {
    let mut candidates = Vec::new();

    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            if let Some((similarity, reasons)) = score_pair(&records[i], &records[j]) {
                if similarity >= threshold {
                    candidates.push(DuplicateCandidate {
                        item1_id: records[i].id.clone(),
                        item2_id: records[j].id.clone(),
                        similarity,
                        reasons,
                    });
                }
            }
        }
    }

    // Stable sort: equal scores keep pair-enumeration order
    candidates.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates
}

/// Cluster records into duplicate groups.
///
/// The first unclaimed record anchors a group; every later unclaimed record
/// whose pair score with the anchor reaches `threshold` joins the group and
/// never starts its own. `confidence` is the highest pair score seen while
/// forming the group. Groups with a single member are dropped.
pub fn find_duplicate_groups(records: &[ContentRecord], threshold: f64) -> Vec<DuplicateGroup> {
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut claimed: HashSet<usize> = HashSet::new();

    for i in 0..records.len() {
        if claimed.contains(&i) {
            continue;
        }

        let mut record_ids = vec![records[i].id.clone()];
        let mut confidence = threshold;

        for j in (i + 1)..records.len() {
            if claimed.contains(&j) {
                continue;
            }
            if let Some((score, _)) = score_pair(&records[i], &records[j]) {
                if score >= threshold {
                    record_ids.push(records[j].id.clone());
                    claimed.insert(j);
                    if score > confidence {
                        confidence = score;
                    }
                }
            }
        }

        if record_ids.len() > 1 {
            groups.push(DuplicateGroup {
                record_ids,
                confidence,
            });
        }
    }

    groups
}
