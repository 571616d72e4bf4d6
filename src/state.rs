// src/state.rs
use std::sync::Arc;

use crate::config::Settings;
use crate::services::dataset::RemoteDataset;
use crate::services::gateway::GatewayProvider;
use crate::services::inference::InferenceProvider;
use crate::services::relay::{ChatRelay, ContextSource};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub gateway: ChatRelay,
    pub inference: ChatRelay,
}

impl AppState {
    pub fn new(gateway: ChatRelay, inference: ChatRelay) -> Self {
        Self { gateway, inference }
    }

    /// Wires both relays to their hosted upstreams. Credentials are captured
    /// here, once, and never re-read from the environment.
    pub fn from_settings(settings: &Settings) -> Self {
        let timeout = settings.upstream_timeout;

        let gateway = ChatRelay::new(
            Arc::new(GatewayProvider::new(&settings.gateway, timeout)),
            settings.gateway.api_key.clone(),
            ContextSource::Request,
        );

        let dataset = RemoteDataset::new(
            settings.inference.dataset_url.clone(),
            settings.inference.dataset_lines,
            timeout,
        );
        let inference = ChatRelay::new(
            Arc::new(InferenceProvider::new(&settings.inference, timeout)),
            settings.inference.api_key.clone(),
            ContextSource::Remote(Arc::new(dataset)),
        );

        Self::new(gateway, inference)
    }
}
