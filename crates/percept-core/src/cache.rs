use crate::model::Prediction;
use crate::storage::Storage;
use std::sync::Arc;

/// Content-addressed store of classification results, keyed by the decimal
/// fingerprint of the frame bytes.
///
/// Both operations are total. A storage failure or an entry that no longer
/// parses degrades to a miss (get) or a dropped write (put), logged at warn
/// level; the capture workflow must keep working without the cache.
#[derive(Clone)]
pub struct PredictionCache {
    storage: Arc<dyn Storage>,
}

impl PredictionCache {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Looks up `key`, returning `None` on a miss. Malformed entries and
    /// backend failures also read as a miss.
    pub fn get(&self, key: &str) -> Option<Prediction> {
        let raw = match self.storage.get(key) {
            Ok(Some(v)) => v,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed, treating as miss");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed cache entry, treating as miss");
                None
            }
        }
    }

    /// Stores `prediction` under `key`, overwriting any previous value
    /// (last write wins). A failed write is logged and dropped.
    pub fn put(&self, key: &str, prediction: &Prediction) {
        let json = match serde_json::to_string(prediction) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!(key, error = %e, "prediction not serializable, not cached");
                return;
            }
        };
        if let Err(e) = self.storage.set(key, &json) {
            tracing::warn!(key, error = %e, "cache write failed, prediction not cached");
        }
    }
}
