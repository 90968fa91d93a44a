use crate::history::HISTORY_KEY;
use crate::storage::Storage;
use anyhow::Context;
use std::sync::Arc;

/// Bulk cache maintenance. Unlike cache reads and writes, failures here
/// surface to the caller: the user asked for the eviction and needs to know
/// it did not happen.
#[derive(Clone)]
pub struct CacheAdmin {
    storage: Arc<dyn Storage>,
}

impl CacheAdmin {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Removes every cached prediction and returns how many were evicted.
    /// The history log is left untouched. A no-op on an empty store.
    pub fn evict_all(&self) -> anyhow::Result<usize> {
        let keys = self
            .storage
            .keys()
            .context("failed to enumerate cache keys")?;
        let mut removed = 0usize;
        for key in keys {
            if key == HISTORY_KEY {
                continue;
            }
            self.storage
                .remove(&key)
                .with_context(|| format!("failed to remove cache entry {}", key))?;
            removed += 1;
        }
        tracing::info!(removed, "prediction cache cleared");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PredictionCache;
    use crate::history::HistoryLog;
    use crate::model::Prediction;
    use crate::storage::MemoryStorage;

    fn prediction(label: &str) -> Prediction {
        Prediction {
            label: label.into(),
            confidence: 0.75,
            model: None,
            meta: serde_json::Value::Null,
        }
    }

    #[test]
    fn evicts_predictions_but_keeps_history() {
        let storage = Arc::new(MemoryStorage::new());
        let cache = PredictionCache::new(storage.clone());
        let history = HistoryLog::new(storage.clone());
        let admin = CacheAdmin::new(storage);

        cache.put("64545", &prediction("gatos"));
        cache.put("-685785664", &prediction("perros"));
        history.append(&prediction("gatos"));

        let removed = admin.evict_all().unwrap();
        assert_eq!(removed, 2);
        assert_eq!(cache.get("64545"), None);
        assert_eq!(cache.get("-685785664"), None);
        assert_eq!(history.list().len(), 1);
    }

    #[test]
    fn empty_store_evicts_nothing() {
        let admin = CacheAdmin::new(Arc::new(MemoryStorage::new()));
        assert_eq!(admin.evict_all().unwrap(), 0);
    }

    #[test]
    fn repeat_eviction_is_idempotent() {
        let storage = Arc::new(MemoryStorage::new());
        let cache = PredictionCache::new(storage.clone());
        let admin = CacheAdmin::new(storage);

        cache.put("1", &prediction("conejos"));
        assert_eq!(admin.evict_all().unwrap(), 1);
        assert_eq!(admin.evict_all().unwrap(), 0);
    }
}
