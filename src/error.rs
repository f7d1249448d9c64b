use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("SERVER_PORT is not a valid port: {0}")]
    InvalidPort(String),
    #[error("failed to read system prompt from {path}: {source}")]
    SystemPrompt {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of a single chat-completion call.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to LLM provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("LLM provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("LLM provider returned no candidates")]
    NoCandidates,
    #[error("LLM provider returned an empty reply")]
    EmptyContent,
}

/// Errors surfaced by the HTTP layer as `500 {"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadPayload(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}
