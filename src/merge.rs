// Merge advisor — finds idea pairs similar enough to combine.
//
// Runs independently of clustering: every unordered pair in the snapshot
// is scored, so a suggestion can involve two records in the same cluster,
// different clusters, or no cluster. The bar is higher than the cluster
// threshold (strictly above 0.6 vs. at-or-above 0.3) because merging is a
// destructive edit the user is asked to confirm.

use serde::{Deserialize, Serialize};

use crate::keywords::KeywordExtractor;
use crate::similarity;
use crate::store::models::IdeaRecord;

/// Tunables for a merge-suggestion pass.
#[derive(Debug, Clone, Copy)]
pub struct MergeParams {
    /// Pairs must score strictly above this (default 0.6)
    pub pair_threshold: f64,
    /// Maximum suggestions returned (default 5)
    pub limit: usize,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            pair_threshold: 0.6,
            limit: 5,
        }
    }
}

/// A pair of records worth merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOpportunity {
    /// Id of the earlier record in scan order
    pub first: String,
    /// Id of the later record
    pub second: String,
    /// Human-readable justification listing the shared keywords
    pub reason: String,
    /// Similarity as a rounded percentage
    pub similarity: u32,
}

/// Score every unordered pair and return the strongest candidates.
///
/// Results are sorted by similarity percentage descending (ties keep pair
/// scan order) and truncated to `limit`. A pair at exactly the threshold
/// is excluded.
pub fn suggest_merges(records: &[IdeaRecord], params: &MergeParams) -> Vec<MergeOpportunity> {
    let extractor = KeywordExtractor::default();
    let keyword_sets: Vec<Vec<String>> = records
        .iter()
        .map(|record| extractor.extract(&record.content))
        .collect();

    let mut opportunities: Vec<MergeOpportunity> = Vec::new();

    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let score = similarity::jaccard(&keyword_sets[i], &keyword_sets[j]);
            if score <= params.pair_threshold {
                continue;
            }

            // Shared keywords in the first record's keyword order
            let shared: Vec<&str> = keyword_sets[i]
                .iter()
                .filter(|kw| keyword_sets[j].contains(kw))
                .map(String::as_str)
                .collect();

            opportunities.push(MergeOpportunity {
                first: records[i].id.clone(),
                second: records[j].id.clone(),
                reason: format!("shared keywords: {}", shared.join(", ")),
                similarity: (score * 100.0).round() as u32,
            });
        }
    }

    opportunities.sort_by(|a, b| b.similarity.cmp(&a.similarity));
    opportunities.truncate(params.limit);
    opportunities
}
