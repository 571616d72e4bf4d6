// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

pub const GENERIC_REPLY: &str =
    "I encountered an error. Please try again or rephrase your question.";
const RATE_LIMIT_REPLY: &str =
    "I apologize, but I'm experiencing high demand. Please try again in a moment.";
const PAYMENT_REPLY: &str = "Service unavailable. Please contact support.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{provider} API key not configured")]
    MissingCredential { provider: &'static str },

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("Payment required. Please add credits to your workspace.")]
    PaymentRequired,

    #[error("{provider} API error: {status}")]
    Upstream { provider: &'static str, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidPayload(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Conversational sentence the UI shows in place of a model answer.
    pub fn reply(&self) -> &'static str {
        match self {
            AppError::RateLimited => RATE_LIMIT_REPLY,
            AppError::PaymentRequired => PAYMENT_REPLY,
            _ => GENERIC_REPLY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(status = %self.status(), "chat request failed: {}", self);
        let body = ErrorResponse {
            error: self.to_string(),
            reply: self.reply().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
