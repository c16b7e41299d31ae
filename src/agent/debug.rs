use std::sync::Mutex;

use crate::agent::prompts;
use crate::ai::provider::AiProvider;
use crate::error::AppError;

/// Error logs shorter than this (trimmed) are rejected before any network
/// call; anything under 10 characters is noise, not a traceback.
pub const MIN_ERROR_LOG_LEN: usize = 10;

/// Ask the completion service to locate and fix the fault in the most
/// recently generated script, given an error log from an Abaqus run.
///
/// One call, no retry. Requires a prior successful generation.
pub async fn debug_script(
    provider: &dyn AiProvider,
    error_log: &str,
    latest_script: &Mutex<Option<String>>,
) -> Result<String, AppError> {
    let error_log = error_log.trim();
    if error_log.chars().count() < MIN_ERROR_LOG_LEN {
        return Err(AppError::Validation(format!(
            "'error_log' must be at least {} characters",
            MIN_ERROR_LOG_LEN
        )));
    }

    let script = latest_script
        .lock()
        .unwrap()
        .clone()
        .ok_or_else(|| AppError::State("no script available".into()))?;

    let messages = prompts::debug_request(error_log, &script);
    let (text, _usage) = provider.complete(&messages, None).await?;
    Ok(text)
}
