// Record store — where idea records live.
//
// The clustering core never owns records; it reads a snapshot through the
// RecordStore trait and optionally writes back one annotation per member.
// SqliteStore is the real backend; MemoryStore backs tests.

pub mod memory;
pub mod models;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryStore;
pub use models::IdeaRecord;
pub use sqlite::SqliteStore;
pub use traits::RecordStore;
