// Greedy single-pass cluster builder.
//
// Each record gets one chance to act as a base: all other unclaimed
// records are compared against the base's keyword set (never against each
// other), and everything at or above the similarity threshold joins. The
// result is deliberately NOT a transitive closure — two members similar to
// the base but not to each other still share a cluster, and a record
// similar to a member but not to the base stays out. This base-centric
// rule is order-sensitive and load-bearing; do not "fix" it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{analyzer, Cluster, ClusterParams};
use crate::keywords::KeywordExtractor;
use crate::similarity;
use crate::store::models::IdeaRecord;

/// Partition a snapshot of records into clusters.
///
/// Records are scanned in input order, once each as a potential base.
/// A base that fails to gather `min_cluster_size` members is not retried,
/// but stays eligible to join a later base's cluster. Emitted clusters are
/// sorted by strength descending; ties keep emission order.
///
/// `now` anchors recency scoring so a run is reproducible.
pub fn build_clusters(
    records: &[IdeaRecord],
    params: &ClusterParams,
    now: DateTime<Utc>,
) -> Vec<Cluster> {
    let extractor = KeywordExtractor::default();

    // Keyword sets are computed once per record per run, not per pair.
    let keyword_sets: Vec<Vec<String>> = records
        .iter()
        .map(|record| extractor.extract(&record.content))
        .collect();

    let mut processed: HashSet<&str> = HashSet::new();
    let mut clusters: Vec<Cluster> = Vec::new();

    for (base_idx, base) in records.iter().enumerate() {
        if processed.contains(base.id.as_str()) {
            continue;
        }

        let base_keywords = &keyword_sets[base_idx];
        let mut member_indices = vec![base_idx];
        // Accumulates the base's keywords plus every per-match
        // intersection; duplicates are meaningful for theme frequency.
        let mut accumulated: Vec<String> = base_keywords.clone();

        for (idx, candidate) in records.iter().enumerate() {
            if idx == base_idx || processed.contains(candidate.id.as_str()) {
                continue;
            }

            let candidate_keywords = &keyword_sets[idx];
            let score = similarity::jaccard(base_keywords, candidate_keywords);
            if score < params.similarity_threshold {
                continue;
            }

            member_indices.push(idx);
            // Shared keywords for this match: base keywords that a member
            // keyword contains or is contained by (so "학습" matches
            // "학습법").
            accumulated.extend(
                base_keywords
                    .iter()
                    .filter(|kw| {
                        candidate_keywords
                            .iter()
                            .any(|ck| ck.contains(kw.as_str()) || kw.contains(ck.as_str()))
                    })
                    .cloned(),
            );
        }

        if member_indices.len() < params.min_cluster_size {
            // Discard the candidate cluster. The base is NOT marked
            // processed — it can still match a later base.
            continue;
        }

        let members: Vec<IdeaRecord> = member_indices
            .iter()
            .map(|&idx| records[idx].clone())
            .collect();
        for &idx in &member_indices {
            processed.insert(records[idx].id.as_str());
        }

        let summary = analyzer::analyze(&members, &accumulated, now);
        let id = format!("cluster-{}", clusters.len() + 1);
        debug!(
            id = %id,
            members = members.len(),
            strength = summary.strength,
            theme = %summary.theme,
            "emitted cluster"
        );

        clusters.push(Cluster {
            id,
            theme: summary.theme,
            members,
            strength: summary.strength,
            common_keywords: summary.common_keywords,
        });
    }

    // Stable sort: equal strengths keep emission order.
    clusters.sort_by(|a, b| b.strength.cmp(&a.strength));
    clusters
}
