use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::agent::generate::{self, GenerationConfig};
use crate::error::AppError;
use crate::routes::parse_json;
use crate::state::SharedState;

#[derive(Deserialize)]
struct GenerateRequest {
    prompt: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub script: String,
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<String>,
}

pub async fn generate_script(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, AppError> {
    let request: GenerateRequest = parse_json(&body)?;

    let config = state.config.lock().unwrap().clone();
    let provider = (state.provider_factory)(&config)?;
    let generation = GenerationConfig {
        max_attempts: config.max_generation_attempts,
        review_enabled: config.enable_script_review,
    };

    let outcome = generate::generate_script(
        provider.as_ref(),
        &request.prompt,
        &generation,
        &state.latest_script,
    )
    .await?;

    Ok(Json(GenerateResponse {
        script: outcome.script,
        attempts: outcome.attempts,
        verification: outcome.verification,
    }))
}
