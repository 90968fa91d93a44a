use super::Classifier;
use crate::fingerprint;
use crate::model::Prediction;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The classes the original deployment's model was trained on.
const LABELS: [&str; 5] = ["perros", "gatos", "conejos", "pájaros", "hámsters"];

/// Deterministic classifier for tests and offline runs. The label and score
/// are derived from the frame fingerprint, so identical bytes always
/// classify identically and distinct fixtures can target distinct labels.
#[derive(Default)]
pub struct FakeClassifier {
    calls: AtomicUsize,
}

impl FakeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify calls served so far. Tests use this to prove a repeat frame
    /// was answered from cache instead of a second remote call.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for FakeClassifier {
    async fn classify(&self, image: &[u8]) -> anyhow::Result<Prediction> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fp = fingerprint::fingerprint(image).unsigned_abs();
        Ok(Prediction {
            label: LABELS[fp as usize % LABELS.len()].to_string(),
            confidence: 0.50 + f64::from(fp % 50) / 100.0,
            model: Some("fake".into()),
            meta: serde_json::Value::Null,
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
