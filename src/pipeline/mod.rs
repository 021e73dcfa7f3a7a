// Pipeline orchestration — fetch a snapshot, run the pure core, persist.
//
// Each run fetches its own snapshot, so concurrent runs against a live
// store simply see whatever each fetch returned. No locking, no retries:
// a failed fetch surfaces before any clustering logic executes.

pub mod clustering;
pub mod merges;

pub use clustering::{cluster_all, cluster_collection, persist_references};
pub use merges::suggest_merges;
