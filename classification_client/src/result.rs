use serde::Deserialize;
use std::collections::HashMap;

/// Outcome of one classification call, decoded from the service's JSON
/// response.
///
/// `label` and `confidence` are the only required fields; everything
/// else decodes to `None` when the service omits it, and unknown fields
/// are ignored. `confidence` is transmitted as text by the service and
/// is kept as text here, callers format it verbatim.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClassificationResult {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: String,
    #[serde(default)]
    pub all_predictions: Option<HashMap<String, f32>>,
    #[serde(default)]
    pub processing_time_sec: Option<f32>,
    #[serde(default)]
    pub model_prediction_time_sec: Option<f32>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
