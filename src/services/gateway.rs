// src/services/gateway.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::config::GatewayConfig;
use crate::error::AppError;
use crate::http_client;
use crate::services::provider::{Prompt, UpstreamProvider, non_empty_text};

const PERSONA: &str = "You are an expert EV (Electric Vehicle) data analyst assistant. You help users understand and analyze their EV datasets.";
const FALLBACK_REPLY: &str = "I apologize, but I could not generate a response.";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// OpenAI-style chat-completions endpoint behind the hosted AI gateway.
#[derive(Debug, Clone)]
pub struct GatewayProvider {
    url: String,
    model: String,
    timeout: Option<Duration>,
}

impl GatewayProvider {
    pub fn new(config: &GatewayConfig, timeout: Option<Duration>) -> Self {
        Self {
            url: config.url.clone(),
            model: config.model.clone(),
            timeout,
        }
    }
}

pub fn system_prompt(context: Option<&str>) -> String {
    let mut prompt = PERSONA.to_string();
    if let Some(context) = context.filter(|c| !c.is_empty()) {
        prompt.push_str(&format!(
            "\n\nThe user has uploaded an EV dataset. Here is a sample of the data:\n\n{}\n\nUse this data to answer questions accurately. Provide specific insights, statistics, and recommendations based on the actual data shown above.",
            context
        ));
    }
    prompt
}

/// `choices[0].message.content`
pub fn extract_reply(body: &Value) -> Option<String> {
    non_empty_text(body.pointer("/choices/0/message/content"))
}

#[async_trait]
impl UpstreamProvider for GatewayProvider {
    fn name(&self) -> &'static str {
        "Lovable AI"
    }

    fn credential_label(&self) -> &'static str {
        "Lovable"
    }

    fn fallback_reply(&self) -> &'static str {
        FALLBACK_REPLY
    }

    async fn complete(&self, api_key: &str, prompt: &Prompt) -> Result<Option<String>, AppError> {
        let system = system_prompt(prompt.context.as_deref());
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: &system },
                ChatMessage { role: "user", content: &prompt.message },
            ],
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
            tracing::error!(status = status.as_u16(), %detail, "Lovable AI returned an error");
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => AppError::PaymentRequired,
                _ => AppError::Upstream { provider: self.name(), status: status.as_u16() },
            });
        }

        let result: Value = response.json().await?;
        tracing::info!("AI response received");
        Ok(extract_reply(&result))
    }
}
