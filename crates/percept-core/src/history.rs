use crate::model::{HistoryEntry, Prediction};
use crate::storage::Storage;
use std::sync::Arc;

/// Storage key reserved for the history log. Cache keys are stringified
/// `i32` fingerprints, so any key that does not parse as an `i32` can never
/// collide with one.
pub const HISTORY_KEY: &str = "prediction_history";

/// Entries retained before the oldest are dropped.
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded log of recent predictions, stored chronologically under
/// [`HISTORY_KEY`] and listed newest first.
///
/// Appends are a read-modify-write of the whole stored sequence, which is
/// only safe under this crate's single-writer model (one logical writer per
/// store). Failures are contained the same way the cache contains them: the
/// append is dropped, a warning is logged, and the caller keeps going.
#[derive(Clone)]
pub struct HistoryLog {
    storage: Arc<dyn Storage>,
}

impl HistoryLog {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Records `prediction` with the current local wall-clock time, dropping
    /// the oldest entries beyond [`HISTORY_CAPACITY`]. When the stored log
    /// cannot be read back, the append itself is dropped; it must never
    /// overwrite entries the backend still holds.
    pub fn append(&self, prediction: &Prediction) {
        let mut entries = match self.load() {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "history read failed, append dropped");
                return;
            }
        };
        entries.push(HistoryEntry {
            prediction: prediction.clone(),
            captured_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        if entries.len() > HISTORY_CAPACITY {
            let excess = entries.len() - HISTORY_CAPACITY;
            entries.drain(..excess);
        }
        let json = match serde_json::to_string(&entries) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!(error = %e, "history not serializable, append dropped");
                return;
            }
        };
        if let Err(e) = self.storage.set(HISTORY_KEY, &json) {
            tracing::warn!(error = %e, "history write failed, append dropped");
        }
    }

    /// Entries newest first. The stored order stays chronological; the
    /// reversal is presentation only. A backend read failure lists as empty.
    pub fn list(&self) -> Vec<HistoryEntry> {
        let mut entries = match self.load() {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "history read failed, listing empty");
                return Vec::new();
            }
        };
        entries.reverse();
        entries
    }

    /// Absent and corrupt data load as an empty log. Backend failures
    /// propagate; append and list contain them differently.
    fn load(&self) -> anyhow::Result<Vec<HistoryEntry>> {
        let raw = match self.storage.get(HISTORY_KEY)? {
            Some(v) => v,
            None => return Ok(Vec::new()),
        };
        match serde_json::from_str(&raw) {
            Ok(v) => Ok(v),
            Err(e) => {
                tracing::warn!(error = %e, "corrupt history, starting empty");
                Ok(Vec::new())
            }
        }
    }
}
