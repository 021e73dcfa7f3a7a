// Cluster analysis — theme label and composite strength score.
//
// The strength formula ranks clusters by three signals:
//
//   strength = idea_score + keyword_score + recency_score
//
//   idea_score    = min(member_count * 10, 50)
//   keyword_score = min(unique_common_keywords * 5, 30)
//   recency_score = mean over members of max(0, 20 - days_since_capture)
//
// idea_score and keyword_score alone can reach 80, so strength above 100
// is possible and valid.

use chrono::{DateTime, Utc};

use crate::store::models::IdeaRecord;

/// Seconds per day, for fractional day-age computation.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Derived annotations for one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    pub theme: String,
    pub strength: u32,
    pub common_keywords: Vec<String>,
}

/// Analyze a cluster's membership and accumulated keyword list.
///
/// `accumulated_keywords` is the builder's running list: the base's
/// keywords plus one entry per time a keyword recurred in a match
/// intersection. Duplicates drive theme frequency; uniqueness drives the
/// keyword score. Applying this twice to the same inputs gives the same
/// summary.
pub fn analyze(
    members: &[IdeaRecord],
    accumulated_keywords: &[String],
    now: DateTime<Utc>,
) -> ClusterSummary {
    ClusterSummary {
        theme: derive_theme(accumulated_keywords, members.len()),
        strength: compute_strength(members, accumulated_keywords, now),
        common_keywords: dedup_capped(accumulated_keywords, 5),
    }
}

/// Label a cluster from its two most frequent accumulated keywords.
/// Ties keep first-accumulated order (stable sort).
fn derive_theme(keywords: &[String], member_count: usize) -> String {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for keyword in keywords {
        match counts.iter_mut().find(|(k, _)| *k == keyword.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((keyword, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    match counts.as_slice() {
        [] => format!("{member_count} grouped ideas"),
        [(keyword, _)] => format!("{keyword} related"),
        [(first, _), (second, _), ..] => format!("{first} & {second}"),
    }
}

/// Compute the composite strength score, rounded to an integer.
fn compute_strength(members: &[IdeaRecord], keywords: &[String], now: DateTime<Utc>) -> u32 {
    let idea_score = (members.len() as u32 * 10).min(50);
    let keyword_score = (unique_count(keywords) as u32 * 5).min(30);

    // Members without a timestamp add 0 to the numerator but still
    // dilute the average.
    let recency_score = if members.is_empty() {
        0.0
    } else {
        let total: f64 = members
            .iter()
            .map(|member| match member.created_at {
                Some(created) => {
                    let days_since = (now - created).num_seconds() as f64 / SECONDS_PER_DAY;
                    (20.0 - days_since).max(0.0)
                }
                None => 0.0,
            })
            .sum();
        total / members.len() as f64
    };

    (f64::from(idea_score) + f64::from(keyword_score) + recency_score).round() as u32
}

fn unique_count(keywords: &[String]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for keyword in keywords {
        if !seen.contains(&keyword.as_str()) {
            seen.push(keyword);
        }
    }
    seen.len()
}

/// Deduplicate preserving first-seen order, capped at `cap` entries.
fn dedup_capped(keywords: &[String], cap: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for keyword in keywords {
        if !out.contains(keyword) {
            out.push(keyword.clone());
            if out.len() == cap {
                break;
            }
        }
    }
    out
}
