use async_trait::async_trait;

/// Single-turn text completion. Implementations decide the provider and model;
/// callers only see prompt in, text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("provider request failed: {0}")]
    ApiRequestFailed(String),
    #[error("provider did not answer in time")]
    Timeout,
    #[error("rate limited by provider")]
    RateLimited,
    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),
}
