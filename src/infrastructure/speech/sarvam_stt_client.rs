use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{SpeechToText, SpeechToTextError};

/// Speech-to-text client for the Sarvam API. Sends one canonical-format
/// audio chunk per call as a multipart upload, single speaker, no
/// timestamps, no diarization.
pub struct SarvamSttClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    language_code: String,
}

impl SarvamSttClient {
    pub fn new(endpoint: &str, api_key: &str, model: &str, language_code: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            language_code: language_code.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct SttResponse {
    transcript: Option<String>,
}

#[async_trait]
impl SpeechToText for SarvamSttClient {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, SpeechToTextError> {
        let file_part = multipart::Part::bytes(audio.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| SpeechToTextError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("language_code", self.language_code.clone())
            .text("with_timestamps", "false")
            .text("with_diarization", "false")
            .text("num_speakers", "1");

        tracing::debug!(endpoint = %self.endpoint, bytes = audio.len(), "Sending audio chunk for transcription");

        let response = self
            .client
            .post(&self.endpoint)
            .header("API-Subscription-Key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SpeechToTextError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SpeechToTextError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: SttResponse = response
            .json()
            .await
            .map_err(|e| SpeechToTextError::InvalidResponse(e.to_string()))?;

        let transcript = result.transcript.unwrap_or_default();
        tracing::info!(chars = transcript.len(), "Transcription chunk completed");

        Ok(transcript.trim().to_string())
    }
}
