use async_trait::async_trait;

#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize one text segment into decoded audio bytes.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TextToSpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextToSpeechError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("response carried no audio entries")]
    EmptyAudio,
    #[error("invalid audio payload: {0}")]
    InvalidPayload(String),
}
