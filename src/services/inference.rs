// src/services/inference.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::InferenceConfig;
use crate::error::AppError;
use crate::http_client;
use crate::services::provider::{Prompt, UpstreamProvider, non_empty_text};

const INSTRUCTION: &str = "You are an EV expert assistant with access to a dataset of electric vehicles. Answer questions based on this data.";
const FALLBACK_REPLY: &str =
    "I apologize, but I could not generate a response. Please try rephrasing your question.";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct GenerationParameters {
    max_length: u32,
    temperature: f32,
}

/// Hosted sequence-to-sequence conversational model.
#[derive(Debug, Clone)]
pub struct InferenceProvider {
    url: String,
    parameters: GenerationParameters,
    timeout: Option<Duration>,
}

impl InferenceProvider {
    pub fn new(config: &InferenceConfig, timeout: Option<Duration>) -> Self {
        Self {
            url: config.url.clone(),
            parameters: GenerationParameters {
                max_length: config.max_length,
                temperature: config.temperature,
            },
            timeout,
        }
    }
}

/// Single flat prompt; the model has no notion of roles. An empty excerpt
/// still gets the instruction and dataset header.
pub fn combined_prompt(context: Option<&str>, message: &str) -> String {
    match context {
        Some(excerpt) => format!(
            "{}\n\n\nEV Cars Dataset (sample):\n{}\n\nUser question: {}",
            INSTRUCTION, excerpt, message
        ),
        None => message.to_string(),
    }
}

/// First element's `generated_text`, falling back to `text`.
pub fn extract_reply(body: &Value) -> Option<String> {
    let first = body.as_array()?.first()?;
    non_empty_text(first.get("generated_text")).or_else(|| non_empty_text(first.get("text")))
}

#[async_trait]
impl UpstreamProvider for InferenceProvider {
    fn name(&self) -> &'static str {
        "Hugging Face"
    }

    fn fallback_reply(&self) -> &'static str {
        FALLBACK_REPLY
    }

    async fn complete(&self, api_key: &str, prompt: &Prompt) -> Result<Option<String>, AppError> {
        let inputs = combined_prompt(prompt.context.as_deref(), &prompt.message);
        let body = InferenceRequest {
            inputs: &inputs,
            parameters: self.parameters,
        };

        let response = http_client::client(self.timeout)?
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %detail, "inference API returned an error");
            return Err(AppError::Upstream {
                provider: self.name(),
                status: status.as_u16(),
            });
        }

        let result: Value = response.json().await?;
        tracing::debug!(%result, "inference response");
        Ok(extract_reply(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_message_when_no_context() {
        assert_eq!(combined_prompt(None, "Best range?"), "Best range?");
    }

    #[test]
    fn empty_excerpt_keeps_the_dataset_block() {
        assert_eq!(
            combined_prompt(Some(""), "hi"),
            format!("{}\n\n\nEV Cars Dataset (sample):\n\n\nUser question: hi", INSTRUCTION)
        );
    }

    #[test]
    fn context_and_question_are_concatenated() {
        let prompt = combined_prompt(Some("make,range\nKia,450"), "Best range?");
        assert!(prompt.starts_with(INSTRUCTION));
        assert!(prompt.contains("EV Cars Dataset (sample):\nmake,range\nKia,450"));
        assert!(prompt.ends_with("\n\nUser question: Best range?"));
    }

    #[test]
    fn prefers_generated_text_then_text() {
        assert_eq!(extract_reply(&json!([{"generated_text": "X"}])).as_deref(), Some("X"));
        assert_eq!(extract_reply(&json!([{"text": "Y"}])).as_deref(), Some("Y"));
        assert_eq!(
            extract_reply(&json!([{"generated_text": "", "text": "Y"}])).as_deref(),
            Some("Y")
        );
    }

    #[test]
    fn empty_or_malformed_payloads_yield_none() {
        assert_eq!(extract_reply(&json!([])), None);
        assert_eq!(extract_reply(&json!({"generated_text": "X"})), None);
        assert_eq!(extract_reply(&json!([{"label": "X"}])), None);
        assert_eq!(extract_reply(&json!(["X"])), None);
    }

    #[test]
    fn request_body_shape() {
        let body = InferenceRequest {
            inputs: "hi",
            parameters: GenerationParameters { max_length: 300, temperature: 0.5 },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"inputs": "hi", "parameters": {"max_length": 300, "temperature": 0.5}})
        );
    }
}
