pub mod assist;
pub mod debug;
pub mod generate;
pub mod run;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Parse a JSON request body, mapping every failure (including a missing
/// body) to a 400-class validation error.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    if body.is_empty() {
        return Err(AppError::Validation("request body is required".into()));
    }

    serde_json::from_slice(body)
        .map_err(|err| AppError::Validation(format!("invalid JSON body: {}", err)))
}
