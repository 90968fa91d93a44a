use serde::{Deserialize, Serialize};

/// A single classification result as stored in the cache and shown to the
/// user. `label` is one of the classes the remote model was trained on;
/// `confidence` is the model's score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub meta: serde_json::Value,
}

/// One line of the capture history: the prediction plus the local wall-clock
/// time it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub prediction: Prediction,
    pub captured_at: String,
}

/// What one pass through the capture workflow produced. `cached` is true
/// when the prediction was served from the cache without a remote call.
#[derive(Debug, Clone, Serialize)]
pub struct CaptureOutcome {
    pub prediction: Prediction,
    pub cached: bool,
    pub key: String,
    pub duration_ms: u64,
}
