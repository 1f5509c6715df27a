use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service error variants.
///
/// Credential failures never reach this type; the `BearerIdentity` extractor
/// rejects them with its own 401 response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("agent is required")]
    MissingAgent,
    #[error("internal error")]
    Persistence(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingAgent => "MISSING_AGENT",
            Self::Persistence(_) => "PERSISTENCE",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingAgent => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Only 500s are logged here; TraceLayer already records every request.
        if let Self::Persistence(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "PERSISTENCE", "persistence error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
