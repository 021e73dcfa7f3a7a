use std::collections::HashMap;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use seedbed::config::Config;
use seedbed::output::terminal;
use seedbed::pipeline;
use seedbed::store::models::{IdeaRecord, STATUS_PROPERTY};
use seedbed::store::SqliteStore;

/// Seedbed: thematic clustering for captured idea notes.
///
/// Groups lexically similar ideas into clusters, scores each cluster's
/// strength, and suggests high-similarity pairs worth merging.
#[derive(Parser)]
#[command(name = "seedbed", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the record store
    Init,

    /// Capture a new idea
    Add {
        /// The idea text
        content: String,

        /// Collection (page) the idea belongs to
        #[arg(long)]
        collection: Option<String>,

        /// Lifecycle status (default: captured)
        #[arg(long, default_value = "captured")]
        status: String,
    },

    /// Cluster eligible ideas and report the groups
    Cluster {
        /// Only cluster ideas in this collection
        #[arg(long)]
        collection: Option<String>,

        /// Minimum similarity for cluster membership
        #[arg(long)]
        threshold: Option<f64>,

        /// Smallest cluster worth reporting
        #[arg(long)]
        min_size: Option<usize>,

        /// Write each member's cluster reference back to the store
        #[arg(long)]
        persist: bool,

        /// Emit JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },

    /// Suggest pairs of ideas worth merging
    Merges {
        /// Strict lower similarity bound for suggestions
        #[arg(long)]
        threshold: Option<f64>,

        /// Maximum number of suggestions
        #[arg(long)]
        limit: Option<usize>,

        /// Emit JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },

    /// Show store statistics
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("seedbed=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init => {
            info!("Initializing seedbed record store...");
            let store = SqliteStore::open(&config.db_path)?;
            let tables = store.table_count().await?;
            println!("Record store initialized at: {}", config.db_path);
            println!("Tables created: {tables}");
            println!("\nNext step: capture an idea with `seedbed add \"...\"`");
        }

        Commands::Add {
            content,
            collection,
            status,
        } => {
            let store = SqliteStore::open(&config.db_path)?;
            let now = Utc::now();
            let record = IdeaRecord {
                id: format!("seed-{}", now.timestamp_millis()),
                content,
                created_at: Some(now),
                properties: HashMap::from([(STATUS_PROPERTY.to_string(), status)]),
            };
            store.insert_record(&record, collection.as_deref()).await?;
            println!("Captured {}", record.id.bold());
        }

        Commands::Cluster {
            collection,
            threshold,
            min_size,
            persist,
            json,
        } => {
            let store = SqliteStore::open(&config.db_path)?;
            let mut params = config.cluster_params();
            if let Some(threshold) = threshold {
                params.similarity_threshold = threshold;
            }
            if let Some(min_size) = min_size {
                params.min_cluster_size = min_size;
            }

            let now = Utc::now();
            let clusters = match collection.as_deref() {
                Some(id) => pipeline::cluster_collection(&store, id, &params, now).await?,
                None => pipeline::cluster_all(&store, &params, now).await?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&clusters)?);
            } else {
                terminal::display_clusters(&clusters);
            }

            if persist {
                let written = pipeline::persist_references(&store, &clusters).await?;
                println!("Wrote {written} cluster references.");
            }
        }

        Commands::Merges {
            threshold,
            limit,
            json,
        } => {
            let store = SqliteStore::open(&config.db_path)?;
            let mut params = config.merge_params();
            if let Some(threshold) = threshold {
                params.pair_threshold = threshold;
            }
            if let Some(limit) = limit {
                params.limit = limit;
            }

            let opportunities = pipeline::suggest_merges(&store, &params).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&opportunities)?);
            } else {
                terminal::display_merges(&opportunities);
            }
        }

        Commands::Status => {
            let store = SqliteStore::open(&config.db_path)?;
            let total = store.record_count().await?;
            let clustered = store.clustered_count().await?;
            println!("Record store: {}", config.db_path);
            println!("Ideas captured: {total}");
            println!("With cluster reference: {clustered}");
        }
    }

    Ok(())
}
