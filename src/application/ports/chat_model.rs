use async_trait::async_trait;

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a completion for one flattened prompt string.
    async fn generate(&self, prompt: &str) -> Result<String, ChatModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
