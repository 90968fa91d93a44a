use crate::cache::PredictionCache;
use crate::classifier::Classifier;
use crate::fingerprint::cache_key;
use crate::history::HistoryLog;
use crate::model::{CaptureOutcome, Prediction};
use std::sync::Arc;
use tokio::time::{timeout, Duration};

/// Runs the capture workflow: fingerprint the frame, serve a repeat frame
/// from the cache, otherwise ask the classifier and store the fresh result.
/// Every successful pass is appended to the history log; a classifier error
/// aborts the pass with cache and history unchanged.
pub struct Engine {
    pub cache: PredictionCache,
    pub history: HistoryLog,
    pub classifier: Arc<dyn Classifier>,
    pub use_cache: bool,
    pub timeout_seconds: u64,
}

impl Engine {
    pub async fn capture(&self, image: &[u8]) -> anyhow::Result<CaptureOutcome> {
        let key = cache_key(image);
        let start = std::time::Instant::now();
        let mut cached = false;

        let prediction: Prediction = if self.use_cache {
            if let Some(p) = self.cache.get(&key) {
                cached = true;
                tracing::info!(key = %key, label = %p.label, "cache hit");
                p
            } else {
                let p = self.call_classifier(image).await?;
                self.cache.put(&key, &p);
                p
            }
        } else {
            self.call_classifier(image).await?
        };

        if !cached {
            tracing::info!(
                key = %key,
                label = %prediction.label,
                provider = self.classifier.provider_name(),
                "fresh prediction"
            );
        }
        self.history.append(&prediction);

        Ok(CaptureOutcome {
            prediction,
            cached,
            key,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn call_classifier(&self, image: &[u8]) -> anyhow::Result<Prediction> {
        let fut = self.classifier.classify(image);
        let resp = timeout(Duration::from_secs(self.timeout_seconds), fut).await??;
        Ok(resp)
    }
}
