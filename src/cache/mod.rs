//! Cache Module
//!
//! Generic in-memory key/value caching with TTL expiration. Entries are
//! evicted lazily when read after their deadline; an optional periodic
//! sweep (`CacheStore::purge_expired`) reclaims entries nobody reads.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;

use std::time::Duration;

// == Public Constants ==
/// TTL applied when a `set` call does not specify one and the store was
/// built without an explicit default.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);
