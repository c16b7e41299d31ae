use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::agent::assist;
use crate::error::AppError;
use crate::routes::parse_json;
use crate::state::SharedState;

#[derive(Deserialize)]
struct HelpRequest {
    query: String,
}

#[derive(Serialize)]
pub struct HelpResponse {
    pub response: String,
}

pub async fn abaqus_help(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<HelpResponse>, AppError> {
    let request: HelpRequest = parse_json(&body)?;

    let config = state.config.lock().unwrap().clone();
    let provider = (state.provider_factory)(&config)?;

    let response = assist::abaqus_help(provider.as_ref(), &request.query).await?;
    Ok(Json(HelpResponse { response }))
}

#[derive(Deserialize)]
struct OptimizeRequest {
    prompt: String,
}

#[derive(Serialize)]
pub struct OptimizeResponse {
    pub optimization_tips: String,
}

pub async fn optimize_simulation(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<OptimizeResponse>, AppError> {
    let request: OptimizeRequest = parse_json(&body)?;

    let config = state.config.lock().unwrap().clone();
    let provider = (state.provider_factory)(&config)?;

    let optimization_tips =
        assist::optimize_simulation(provider.as_ref(), &request.prompt).await?;
    Ok(Json(OptimizeResponse { optimization_tips }))
}
