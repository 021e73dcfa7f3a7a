// Colored terminal output for cluster and merge reports.
//
// This module handles all terminal-specific formatting. The core returns
// plain data; everything user-facing happens here.

use colored::Colorize;

use crate::cluster::Cluster;
use crate::merge::MergeOpportunity;

/// Display a ranked cluster report in the terminal.
pub fn display_clusters(clusters: &[Cluster]) {
    if clusters.is_empty() {
        println!("No clusters found. Capture more ideas, or lower the similarity threshold.");
        return;
    }

    let total_ideas: usize = clusters.iter().map(|c| c.members.len()).sum();
    let avg_size = (total_ideas as f64 / clusters.len() as f64).round() as usize;

    println!(
        "\n{}",
        format!(
            "=== Idea Clusters ({} clusters, {} ideas, avg size {}) ===",
            clusters.len(),
            total_ideas,
            avg_size
        )
        .bold()
    );
    println!();

    for (i, cluster) in clusters.iter().enumerate() {
        let strength = format!("strength {:>3}", cluster.strength);
        let colored_strength = if cluster.strength >= 70 {
            strength.bright_green()
        } else if cluster.strength >= 40 {
            strength.bright_yellow()
        } else {
            strength.bright_blue()
        };

        println!(
            "  {:>2}. {:<32} {}  ({} ideas)",
            i + 1,
            cluster.theme.bold(),
            colored_strength,
            cluster.members.len(),
        );

        if !cluster.common_keywords.is_empty() {
            println!(
                "      Keywords: {}",
                cluster.common_keywords.join(", ").dimmed()
            );
        }
        for member in &cluster.members {
            println!("      - [{}] {}", member.id.dimmed(), preview(&member.content));
        }
        println!();
    }
}

/// Display merge opportunities, strongest first.
pub fn display_merges(opportunities: &[MergeOpportunity]) {
    if opportunities.is_empty() {
        println!("No merge candidates — nothing scores above the merge threshold.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Merge Opportunities ({}) ===", opportunities.len()).bold()
    );
    println!();

    for opportunity in opportunities {
        println!(
            "  {} + {}  {}  {}",
            opportunity.first.bold(),
            opportunity.second.bold(),
            format!("{}%", opportunity.similarity).bright_green(),
            opportunity.reason.dimmed(),
        );
    }
    println!();
}

/// First line of a record's content, trimmed for the report.
fn preview(content: &str) -> String {
    let line = content.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return "(no content)".to_string();
    }
    let mut out: String = line.chars().take(60).collect();
    if line.chars().count() > 60 {
        out.push('…');
    }
    out
}
