// Unit tests for the greedy cluster builder.
//
// Exercises the order-sensitive, base-centric matching rule: membership is
// always judged against the base record, never between two members, and a
// failed base stays eligible to join a later base's cluster.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use seedbed::cluster::{build_clusters, ClusterParams};
use seedbed::store::models::IdeaRecord;

fn record(id: &str, content: &str) -> IdeaRecord {
    IdeaRecord {
        id: id.to_string(),
        content: content.to_string(),
        created_at: None,
        properties: HashMap::new(),
    }
}

fn member_ids(cluster: &seedbed::cluster::Cluster) -> Vec<&str> {
    cluster.members.iter().map(|m| m.id.as_str()).collect()
}

// ============================================================
// Spec scenarios
// ============================================================

#[test]
fn korean_seed_pair_clusters() {
    // "모바일" and "학습" survive extraction on both sides ("앱" is a stop
    // word) and push similarity to 2/3, well over the 0.3 threshold.
    let records = vec![
        record("s1", "#seed/idea 모바일 학습 앱"),
        record("s2", "#seed/idea 모바일 학습 플랫폼"),
    ];

    let clusters = build_clusters(&records, &ClusterParams::default(), Utc::now());
    assert_eq!(clusters.len(), 1);
    assert_eq!(member_ids(&clusters[0]), vec!["s1", "s2"]);
    assert_eq!(clusters[0].theme, "모바일 & 학습");
    assert_eq!(clusters[0].common_keywords, vec!["모바일", "학습"]);
}

#[test]
fn tag_only_record_never_clusters() {
    // "#seed/idea " extracts nothing, so it can't reach any threshold.
    let records = vec![
        record("empty", "#seed/idea "),
        record("a", "garden compost soil"),
        record("b", "garden compost worms"),
    ];

    let clusters = build_clusters(&records, &ClusterParams::default(), Utc::now());
    assert_eq!(clusters.len(), 1);
    assert_eq!(member_ids(&clusters[0]), vec!["a", "b"]);
}

#[test]
fn matching_is_base_centric_not_transitive() {
    // sim(a,b) = 3/7, sim(b,c) = 2/6, sim(a,c) = 0. Scanned as a, b, c:
    // a's cluster takes b; c later finds nothing unprocessed and is
    // discarded as a singleton — it does NOT chain in through b.
    let a = record("a", "alpha bravo charlie delta echo");
    let b = record("b", "alpha bravo charlie foxtrot golf");
    let c = record("c", "foxtrot golf hotel");

    let clusters = build_clusters(
        &[a.clone(), b.clone(), c.clone()],
        &ClusterParams::default(),
        Utc::now(),
    );
    assert_eq!(clusters.len(), 1);
    assert_eq!(member_ids(&clusters[0]), vec!["a", "b"]);

    // Same multiset, c first: now c is the base, takes b, and a is left
    // out. The partition is order-sensitive by design.
    let clusters = build_clusters(&[c, a, b], &ClusterParams::default(), Utc::now());
    assert_eq!(clusters.len(), 1);
    assert_eq!(member_ids(&clusters[0]), vec!["c", "b"]);
}

#[test]
fn failed_base_remains_eligible_for_later_bases() {
    // With min_cluster_size 3, x only matches z (sim exactly 0.3, which
    // is inclusive), so x's own candidate cluster {x, z} is discarded.
    // x must then still join z's cluster when z becomes the base.
    let x = record("x", "hub1 hub2 hub3 x01 x02 x03 x04 x05 x06 x07");
    let z = record("z", "hub1 hub2 hub3");
    let w = record("w", "hub1 hub2 hub3 wone");
    let v = record("v", "hub1 hub2 hub3 vone");

    let params = ClusterParams {
        similarity_threshold: 0.3,
        min_cluster_size: 3,
    };
    let clusters = build_clusters(&[x, z, w, v], &params, Utc::now());
    assert_eq!(clusters.len(), 1);
    assert_eq!(member_ids(&clusters[0]), vec!["z", "x", "w", "v"]);
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn no_singleton_clusters() {
    let records = vec![
        record("a", "quantum computing research"),
        record("b", "sourdough bread starter"),
        record("c", "marathon training plan"),
    ];
    let clusters = build_clusters(&records, &ClusterParams::default(), Utc::now());
    assert!(clusters.is_empty());
}

#[test]
fn every_cluster_has_at_least_two_members() {
    let records = vec![
        record("a", "garden compost soil"),
        record("b", "garden compost worms"),
        record("c", "piano chord practice"),
        record("d", "piano chord voicing"),
        record("e", "unrelated lonely note"),
    ];
    let clusters = build_clusters(&records, &ClusterParams::default(), Utc::now());
    assert_eq!(clusters.len(), 2);
    for cluster in &clusters {
        assert!(cluster.members.len() >= 2);
    }
}

#[test]
fn records_belong_to_at_most_one_cluster() {
    let records = vec![
        record("a", "garden compost soil"),
        record("b", "garden compost worms"),
        record("c", "garden soil worms"),
        record("d", "piano chord practice"),
        record("e", "piano chord voicing"),
    ];
    let clusters = build_clusters(&records, &ClusterParams::default(), Utc::now());

    let mut seen: Vec<&str> = Vec::new();
    for cluster in &clusters {
        for member in &cluster.members {
            assert!(!seen.contains(&member.id.as_str()), "{} in two clusters", member.id);
            seen.push(&member.id);
        }
    }
}

#[test]
fn deterministic_across_runs() {
    let records = vec![
        record("a", "habit tracker daily streak"),
        record("b", "habit tracker weekly review"),
        record("c", "habit streak gamification"),
        record("d", "recipe box organization"),
        record("e", "recipe box sharing"),
    ];
    let now = Utc::now();
    let params = ClusterParams::default();

    let first = build_clusters(&records, &params, now);
    let second = build_clusters(&records, &params, now);
    assert_eq!(first, second);
}

#[test]
fn clusters_sorted_by_strength_descending() {
    // The pair is scanned (and emitted) first, but the triple scores
    // higher and must come out on top.
    let now = Utc::now();
    let records = vec![
        record("p1", "piano chord practice"),
        record("p2", "piano chord voicing"),
        record("g1", "garden compost soil"),
        record("g2", "garden compost worms"),
        record("g3", "garden soil worms"),
    ];
    let clusters = build_clusters(&records, &ClusterParams::default(), now);
    assert_eq!(clusters.len(), 2);
    assert!(clusters[0].strength >= clusters[1].strength);
    assert_eq!(member_ids(&clusters[0])[0], "g1");
}

#[test]
fn recent_ideas_strengthen_a_cluster() {
    let now = Utc::now();
    let fresh = |id: &str, content: &str| IdeaRecord {
        id: id.to_string(),
        content: content.to_string(),
        created_at: Some(now - Duration::days(1)),
        properties: HashMap::new(),
    };

    let dated = build_clusters(
        &[
            fresh("a", "garden compost soil"),
            fresh("b", "garden compost worms"),
        ],
        &ClusterParams::default(),
        now,
    );
    let undated = build_clusters(
        &[
            record("a", "garden compost soil"),
            record("b", "garden compost worms"),
        ],
        &ClusterParams::default(),
        now,
    );
    assert!(dated[0].strength > undated[0].strength);
}

#[test]
fn empty_input_yields_no_clusters() {
    let clusters = build_clusters(&[], &ClusterParams::default(), Utc::now());
    assert!(clusters.is_empty());
}

#[test]
fn threshold_override_is_respected() {
    // sim(a,b) = 1/3: in at threshold 0.3, out at 0.5
    let records = vec![
        record("a", "alpha bravo"),
        record("b", "alpha charlie"),
    ];

    let loose = build_clusters(&records, &ClusterParams::default(), Utc::now());
    assert_eq!(loose.len(), 1);

    let strict = ClusterParams {
        similarity_threshold: 0.5,
        min_cluster_size: 2,
    };
    assert!(build_clusters(&records, &strict, Utc::now()).is_empty());
}

#[test]
fn cluster_ids_are_sequential_by_emission() {
    let records = vec![
        record("p1", "piano chord practice"),
        record("p2", "piano chord voicing"),
        record("g1", "garden compost soil"),
        record("g2", "garden compost worms"),
        record("g3", "garden soil worms"),
    ];
    let clusters = build_clusters(&records, &ClusterParams::default(), Utc::now());
    let mut ids: Vec<&str> = clusters.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["cluster-1", "cluster-2"]);
}
