// src/services/provider.rs
use async_trait::async_trait;

use crate::error::AppError;

/// What a relay hands to an upstream model: the user's words plus an
/// optional dataset excerpt. Each provider renders it into its own wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub message: String,
    pub context: Option<String>,
}

impl Prompt {
    pub fn new(message: impl Into<String>, context: Option<String>) -> Self {
        Self {
            message: message.into(),
            context,
        }
    }
}

#[async_trait]
pub trait UpstreamProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// How the credential is named in configuration errors.
    fn credential_label(&self) -> &'static str {
        self.name()
    }

    /// Reply used when the upstream answers successfully but carries no text.
    fn fallback_reply(&self) -> &'static str;

    /// `Ok(None)` means the upstream succeeded without a usable reply.
    async fn complete(&self, api_key: &str, prompt: &Prompt) -> Result<Option<String>, AppError>;
}

/// Non-empty string at `value`, if any.
pub(crate) fn non_empty_text(value: Option<&serde_json::Value>) -> Option<String> {
    value
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
