use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::relay::ChatRelay,
    state::SharedState,
};

/// Gateway proxy: grounds answers in the excerpt the client uploaded.
pub async fn gateway_chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    relay_chat(&state.gateway, payload).await
}

/// Legacy inference proxy: grounds answers in the hosted sample dataset.
pub async fn inference_chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    relay_chat(&state.inference, payload).await
}

async fn relay_chat(
    relay: &ChatRelay,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::InvalidPayload(rejection.body_text()))?;
    let reply = relay.relay(request).await?;
    Ok(Json(ChatResponse { reply }))
}
