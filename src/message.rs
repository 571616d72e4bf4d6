// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    /// Absent means empty; nothing is validated before forwarding.
    #[serde(default)]
    pub message: String,
    #[serde(rename = "datasetContext", default, skip_serializing_if = "Option::is_none")]
    pub dataset_context: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub reply: String,
}
