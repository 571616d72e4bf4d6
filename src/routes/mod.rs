// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderValue, Method, header::ACCESS_CONTROL_ALLOW_HEADERS},
    routing::post,
};
use chat::{gateway_chat_handler, inference_chat_handler};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chat-ai", post(gateway_chat_handler))
        .route("/chat", post(inference_chat_handler))
        .layer(cors_layer())
        // Outside the CORS layer so preflights carry the same value.
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Any origin may call. Every OPTIONS request is answered here with an
/// empty 200 before routing.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
}
