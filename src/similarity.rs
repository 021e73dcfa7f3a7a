// Jaccard similarity for keyword sets.
//
// Compares two keyword lists as sets: intersection size over union size.
// This gives 0.0 for no shared keywords and 1.0 for identical sets. The
// extractor has already lowercased everything, so no re-normalization
// happens here.

use std::collections::HashSet;

/// Compute the Jaccard index of two keyword lists.
///
/// Returns a score from 0.0 (disjoint) to 1.0 (identical). An empty union
/// (both lists empty) scores 0.0, never a division by zero.
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn identical_sets_score_one() {
        let a = kws(&["mobile", "learning"]);
        assert!((jaccard(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_sets_score_zero() {
        let a = kws(&["mobile"]);
        let b = kws(&["garden"]);
        assert!(jaccard(&a, &b).abs() < 1e-9);
    }

    #[test]
    fn both_empty_scores_zero() {
        assert!(jaccard(&[], &[]).abs() < 1e-9);
    }

    #[test]
    fn symmetric() {
        let a = kws(&["alpha", "bravo", "charlie"]);
        let b = kws(&["bravo", "delta"]);
        assert!((jaccard(&a, &b) - jaccard(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn partial_overlap_value() {
        // intersection 1, union 4
        let a = kws(&["alpha", "bravo", "charlie"]);
        let b = kws(&["charlie", "delta"]);
        assert!((jaccard(&a, &b) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn duplicate_tokens_count_once() {
        let a = kws(&["alpha", "alpha", "bravo"]);
        let b = kws(&["alpha", "bravo"]);
        assert!((jaccard(&a, &b) - 1.0).abs() < 1e-9);
    }
}
