use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("completion service unreachable: {0}")]
    Transport(String),

    #[error("completion service error: {0}")]
    Upstream(String),

    #[error("no valid script produced after {attempts} attempt(s): {reasons}")]
    GenerationExhausted { attempts: u32, reasons: String },

    #[error("{0}")]
    State(String),

    #[error("Abaqus executable not found")]
    AbaqusNotFound,

    #[error("Abaqus execution error: {0}")]
    AbaqusError(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::State(_) => StatusCode::CONFLICT,
            AppError::Transport(_) | AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::GenerationExhausted { .. }
            | AppError::AbaqusNotFound
            | AppError::AbaqusError(_)
            | AppError::Config(_)
            | AppError::Io(_)
            | AppError::Serde(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(
            AppError::Validation("missing 'prompt' field".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_state_maps_to_409() {
        assert_eq!(
            AppError::State("no script available".into()).status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn upstream_failures_map_to_502() {
        assert_eq!(
            AppError::Transport("timed out".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Upstream("API error (500)".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn exhaustion_maps_to_500() {
        let err = AppError::GenerationExhausted {
            attempts: 3,
            reasons: "missing import marker".into(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("after 3 attempt(s)"));
    }
}
