use crate::agent::prompts;
use crate::ai::provider::AiProvider;
use crate::error::AppError;

pub const MIN_QUERY_LEN: usize = 3;

/// Answer a free-form Abaqus usage or scripting question. One call, no retry.
pub async fn abaqus_help(provider: &dyn AiProvider, query: &str) -> Result<String, AppError> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(AppError::Validation(format!(
            "'query' must be at least {} characters",
            MIN_QUERY_LEN
        )));
    }

    let messages = prompts::help_request(query);
    let (text, _usage) = provider.complete(&messages, None).await?;
    Ok(text)
}

/// Suggest optimizations for a described simulation. One call, no retry.
pub async fn optimize_simulation(
    provider: &dyn AiProvider,
    prompt: &str,
) -> Result<String, AppError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Validation("missing 'prompt' field".into()));
    }

    let messages = prompts::optimize_request(prompt);
    let (text, _usage) = provider.complete(&messages, None).await?;
    Ok(text)
}
