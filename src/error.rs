//! Error types for the NBA games service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, GamesError>;

#[derive(Error, Debug)]
pub enum GamesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Invalid record kind: {kind}")]
    InvalidKind { kind: String },

    #[error("Failed to parse port: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Background task failed: {message}")]
    Task { message: String },
}

impl From<tokio::task::JoinError> for GamesError {
    fn from(err: tokio::task::JoinError) -> Self {
        GamesError::Task {
            message: err.to_string(),
        }
    }
}

impl GamesError {
    /// HTTP status used when this error reaches a request handler.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GamesError::SourceNotFound { .. } => StatusCode::NOT_FOUND,
            GamesError::InvalidKind { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GamesError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            // The guess-player page keys off this exact message
            GamesError::SourceNotFound { .. } => "Stats file not found".to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
