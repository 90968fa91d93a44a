use anyhow::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// String-keyed persistence shared by the prediction cache, the history log
/// and cache administration.
///
/// The backend is injected so tests can run against [`MemoryStorage`] and a
/// broken backend can be simulated. Errors are reported to the caller; each
/// component decides whether to contain them (cache and history degrade to
/// no-ops) or surface them (evict-all).
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}
