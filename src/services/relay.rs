// src/services/relay.rs
use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::message::ChatRequest;
use crate::services::dataset::DatasetSource;
use crate::services::provider::{Prompt, UpstreamProvider};

/// Where the dataset excerpt for a prompt comes from.
#[derive(Clone)]
pub enum ContextSource {
    /// `datasetContext` sent by the client.
    Request,
    /// Fetched per request; a failed fetch means no context, an empty file
    /// still counts as context.
    Remote(Arc<dyn DatasetSource>),
}

/// One chat endpoint: a provider, its credential and a context source.
#[derive(Clone)]
pub struct ChatRelay {
    provider: Arc<dyn UpstreamProvider>,
    api_key: Option<String>,
    context: ContextSource,
}

impl ChatRelay {
    pub fn new(
        provider: Arc<dyn UpstreamProvider>,
        api_key: Option<String>,
        context: ContextSource,
    ) -> Self {
        Self {
            provider,
            api_key,
            context,
        }
    }

    pub async fn relay(&self, request: ChatRequest) -> Result<String, AppError> {
        let span = tracing::info_span!(
            "relay",
            request_id = %Uuid::new_v4(),
            provider = self.provider.name()
        );
        self.relay_inner(request).instrument(span).await
    }

    async fn relay_inner(&self, request: ChatRequest) -> Result<String, AppError> {
        tracing::debug!(message = %request.message, "received message");

        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AppError::MissingCredential {
                provider: self.provider.credential_label(),
            })?;

        let context = self.resolve_context(request.dataset_context).await;
        tracing::info!(has_context = context.is_some(), "forwarding to upstream");

        let prompt = Prompt::new(request.message, context);
        let reply = self
            .provider
            .complete(api_key, &prompt)
            .await?
            .unwrap_or_else(|| {
                tracing::warn!("upstream reply had no text, using fallback");
                self.provider.fallback_reply().to_string()
            });

        Ok(reply)
    }

    async fn resolve_context(&self, from_request: Option<String>) -> Option<String> {
        match &self.context {
            ContextSource::Request => from_request.filter(|c| !c.is_empty()),
            ContextSource::Remote(source) => match source.excerpt().await {
                Ok(excerpt) => Some(excerpt),
                Err(err) => {
                    tracing::warn!("could not load dataset: {}", err);
                    None
                }
            },
        }
    }
}
