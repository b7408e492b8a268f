// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use seeker_kernel::KernelError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Network error: {0}")]
    Network(String),
}

impl EngineError {
    pub fn status(&self) -> StatusCode {
        match self {
            EngineError::Kernel(k_err) if k_err.is_invalid_argument() => StatusCode::BAD_REQUEST,
            EngineError::Kernel(KernelError::NotFound(_)) => StatusCode::NOT_FOUND,
            EngineError::Kernel(_) => StatusCode::INTERNAL_SERVER_ERROR,
            EngineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            EngineError::Network(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            EngineError::Kernel(k_err) => k_err.to_string(),
            EngineError::InvalidInput(msg) => msg,
            EngineError::Network(msg) => msg,
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
