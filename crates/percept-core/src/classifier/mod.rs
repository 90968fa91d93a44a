use crate::model::Prediction;
use async_trait::async_trait;

/// A remote (or simulated) image classification service.
///
/// The engine calls `classify` at most once per cache miss. Errors abort the
/// capture attempt without touching the cache or the history log.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> anyhow::Result<Prediction>;
    fn provider_name(&self) -> &'static str;
}

pub mod fake;
pub mod http;
