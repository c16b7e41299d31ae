pub mod message;
pub mod openai;
pub mod provider;
#[cfg(test)]
pub mod testing;

use std::time::Duration;

use crate::ai::openai::OpenAiProvider;
use crate::ai::provider::AiProvider;
use crate::config::AppConfig;
use crate::error::AppError;

/// Create a completion provider based on the current configuration.
///
/// Everything speaks the OpenAI chat-completions wire format; providers
/// differ only in base URL and credentials.
pub fn create_provider(config: &AppConfig) -> Result<Box<dyn AiProvider>, AppError> {
    let timeout = Duration::from_secs(config.request_timeout_seconds);
    match config.ai_provider.as_str() {
        "deepseek" => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| AppError::Config("DeepSeek API key not set".into()))?;
            Ok(Box::new(OpenAiProvider::new(
                api_key,
                config.model.clone(),
                Some("https://api.deepseek.com/v1".to_string()),
                timeout,
            )))
        }
        _ => {
            // Default to OpenAI (or any compatible host via openai_base_url).
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| AppError::Config("OpenAI API key not set".into()))?;
            Ok(Box::new(OpenAiProvider::new(
                api_key,
                config.model.clone(),
                config.openai_base_url.clone(),
                timeout,
            )))
        }
    }
}
