// Seedbed: thematic clustering for captured idea notes.
//
// This is the library root. Each module corresponds to one stage of the
// clustering pipeline: keyword extraction, similarity scoring, cluster
// building and analysis, and merge suggestion, plus the record store
// adapters and terminal output.

pub mod cluster;
pub mod config;
pub mod keywords;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod store;
