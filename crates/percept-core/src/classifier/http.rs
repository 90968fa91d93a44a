use super::Classifier;
use crate::model::Prediction;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;

/// Client for the HTTP prediction endpoint. The endpoint takes a base64
/// frame and answers `{"class": "...", "confidence": 0.87}`.
pub struct HttpClassifier {
    pub endpoint: String,
    pub model: Option<String>,
    pub client: reqwest::Client,
}

impl HttpClassifier {
    pub fn new(endpoint: String, model: Option<String>) -> Self {
        Self {
            endpoint,
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, image: &[u8]) -> anyhow::Result<Prediction> {
        let body = json!({
            "image": BASE64.encode(image),
        });

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            anyhow::bail!("prediction endpoint error ({}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;

        let label = json
            .get("class")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("prediction response missing class"))?
            .to_string();
        let confidence = json
            .get("confidence")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| anyhow::anyhow!("prediction response missing confidence"))?;

        Ok(Prediction {
            label,
            confidence,
            model: self.model.clone(),
            meta: serde_json::Value::Null,
        })
    }

    fn provider_name(&self) -> &'static str {
        "http"
    }
}
