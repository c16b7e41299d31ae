use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::agent::debug;
use crate::error::AppError;
use crate::routes::parse_json;
use crate::state::SharedState;

#[derive(Deserialize)]
struct DebugRequest {
    error_log: String,
}

#[derive(Serialize)]
pub struct DebugResponse {
    pub debugging_tips: String,
}

pub async fn debug_log(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<DebugResponse>, AppError> {
    let request: DebugRequest = parse_json(&body)?;

    let config = state.config.lock().unwrap().clone();
    let provider = (state.provider_factory)(&config)?;

    let debugging_tips =
        debug::debug_script(provider.as_ref(), &request.error_log, &state.latest_script).await?;

    Ok(Json(DebugResponse { debugging_tips }))
}
