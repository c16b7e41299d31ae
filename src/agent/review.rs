use crate::agent::prompts;
use crate::ai::provider::AiProvider;
use crate::error::AppError;

/// Ask the completion service to audit a generated script.
///
/// One call, no retry; the reviewer's raw response is returned unmodified
/// (either an approval or a corrected script with explanations).
pub async fn review_script(
    provider: &dyn AiProvider,
    script: &str,
) -> Result<String, AppError> {
    if script.trim().is_empty() {
        return Err(AppError::Validation("cannot review an empty script".into()));
    }

    let messages = prompts::review_request(script);
    let (text, _usage) = provider.complete(&messages, Some(2048)).await?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::StubProvider;

    const SCRIPT: &str = "from abaqus import *\nmdb.Model(name='Beam')";

    #[tokio::test]
    async fn review_is_deterministic_against_a_deterministic_stub() {
        let provider = StubProvider::new().push_text("APPROVED").push_text("APPROVED");

        let first = review_script(&provider, SCRIPT).await.unwrap();
        let second = review_script(&provider, SCRIPT).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn review_rejects_empty_script() {
        let provider = StubProvider::new();
        let result = review_script(&provider, "   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn review_surfaces_upstream_failure() {
        let provider = StubProvider::new().push_upstream_error("API error (503)");
        let result = review_script(&provider, SCRIPT).await;
        assert!(matches!(result, Err(AppError::Upstream(_))));
    }
}
