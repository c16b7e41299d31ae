use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::abaqus::runner;
use crate::agent::validate;
use crate::error::AppError;
use crate::routes::parse_json;
use crate::state::SharedState;

#[derive(Default, Deserialize)]
struct RunRequest {
    /// When absent, the most recently generated script is run.
    #[serde(default)]
    script: Option<String>,
}

#[derive(Serialize)]
pub struct RunResponse {
    pub stdout: String,
    pub stderr: String,
}

pub async fn run_script(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<RunResponse>, AppError> {
    let request: RunRequest = if body.is_empty() {
        RunRequest::default()
    } else {
        parse_json(&body)?
    };

    let raw = match request.script {
        Some(script) if !script.trim().is_empty() => script,
        _ => state
            .latest_script
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::State("no script available".into()))?,
    };

    let script_body = validate::extract_script_body(&raw)
        .ok_or_else(|| AppError::Validation("no runnable script found in input".into()))?;

    let abaqus_command = state.config.lock().unwrap().abaqus_command.clone();

    // Command::output blocks; keep it off the async workers.
    let result =
        tokio::task::spawn_blocking(move || runner::execute_script(&abaqus_command, &script_body))
            .await
            .map_err(|err| AppError::AbaqusError(format!("runner task failed: {}", err)))??;

    Ok(Json(RunResponse {
        stdout: result.stdout,
        stderr: result.stderr,
    }))
}
