use std::sync::Mutex;

use crate::agent::{prompts, review, validate};
use crate::ai::provider::{AiProvider, TokenUsage};
use crate::error::AppError;

/// Policy knobs for the generation loop.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub max_attempts: u32,
    pub review_enabled: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            review_enabled: true,
        }
    }
}

/// Result of a successful generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub script: String,
    pub attempts: u32,
    /// Reviewer output, when review is enabled and the review call succeeded.
    pub verification: Option<String>,
    pub usage: TokenUsage,
}

/// Generate an Abaqus script from a natural-language prompt.
///
/// Invokes the provider up to `max_attempts` times, immediately re-asking
/// until a response passes the acceptance predicate (non-empty, carries the
/// Abaqus import marker). A transport or upstream failure consumes an attempt
/// just like a rejected response. The first accepted response overwrites
/// `latest_script` and is optionally handed to the reviewer; a review failure
/// degrades to `verification: None` rather than failing the generation.
pub async fn generate_script(
    provider: &dyn AiProvider,
    prompt: &str,
    config: &GenerationConfig,
    latest_script: &Mutex<Option<String>>,
) -> Result<GenerationOutcome, AppError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Validation("missing 'prompt' field".into()));
    }

    let messages = prompts::generation_request(prompt);
    let max_attempts = config.max_attempts.max(1);
    let mut usage = TokenUsage::default();
    let mut rejections: Vec<String> = Vec::new();

    for attempt in 1..=max_attempts {
        let text = match provider.complete(&messages, None).await {
            Ok((text, attempt_usage)) => {
                if let Some(u) = attempt_usage {
                    usage.add(&u);
                }
                text
            }
            Err(err @ (AppError::Transport(_) | AppError::Upstream(_))) => {
                tracing::warn!(attempt, max_attempts, error = %err, "completion call failed");
                rejections.push(format!("attempt {}: {}", attempt, err));
                continue;
            }
            Err(err) => return Err(err),
        };

        if let Some(reason) = validate::acceptance_failure(&text) {
            tracing::warn!(attempt, max_attempts, reason, "generated response rejected");
            rejections.push(format!("attempt {}: {}", attempt, reason));
            continue;
        }

        *latest_script.lock().unwrap() = Some(text.clone());
        tracing::info!(attempt, chars = text.len(), "script accepted");

        let verification = if config.review_enabled {
            match review::review_script(provider, &text).await {
                Ok(review_text) => Some(review_text),
                Err(err) => {
                    tracing::warn!(error = %err, "script review failed, returning unreviewed script");
                    None
                }
            }
        } else {
            None
        };

        return Ok(GenerationOutcome {
            script: text,
            attempts: attempt,
            verification,
            usage,
        });
    }

    Err(AppError::GenerationExhausted {
        attempts: max_attempts,
        reasons: rejections.join("; "),
    })
}
