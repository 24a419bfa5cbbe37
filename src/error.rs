//! Error types for the answer cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Resolve Error Enum ==
/// Unified error type for the resolve pipeline and its API surface.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The generator failed; carries the generator's own error verbatim.
    /// Only the leading caller for a key ever sees this variant.
    #[error("Generation failed: {0}")]
    Generation(#[from] anyhow::Error),

    /// The in-flight generation this caller waited on did not produce a
    /// cache entry. The completion signal carries no payload, so the
    /// leader's actual error is not recoverable here.
    #[error("upstream generation failed")]
    CoalesceFailed,
}

// == IntoResponse Implementation ==
impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ResolveError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ResolveError::Generation(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            ResolveError::CoalesceFailed => (StatusCode::BAD_GATEWAY, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the answer cache service.
pub type Result<T> = std::result::Result<T, ResolveError>;
