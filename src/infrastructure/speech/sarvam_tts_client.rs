use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TextToSpeech, TextToSpeechError};

/// Fixed voice and style parameters for synthesis.
#[derive(Debug, Clone)]
pub struct VoiceStyle {
    pub speaker: String,
    pub pitch: f32,
    pub pace: f32,
    pub loudness: f32,
    pub sample_rate: u32,
    pub language_code: String,
    pub model: String,
}

impl Default for VoiceStyle {
    fn default() -> Self {
        Self {
            speaker: "meera".to_string(),
            pitch: 0.0,
            pace: 1.2,
            loudness: 1.5,
            sample_rate: 8000,
            language_code: "en-IN".to_string(),
            model: "bulbul:v1".to_string(),
        }
    }
}

/// Text-to-speech client for the Sarvam API. The endpoint expects exactly
/// one input string per call and returns base64-encoded audio.
pub struct SarvamTtsClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    voice: VoiceStyle,
}

impl SarvamTtsClient {
    pub fn new(endpoint: &str, api_key: &str, voice: VoiceStyle) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            voice,
        }
    }
}

#[derive(Serialize)]
struct TtsPayload<'a> {
    inputs: Vec<&'a str>,
    target_language_code: &'a str,
    speaker: &'a str,
    pitch: f32,
    pace: f32,
    loudness: f32,
    speech_sample_rate: u32,
    enable_preprocessing: bool,
    model: &'a str,
}

#[derive(Deserialize)]
struct TtsResponse {
    #[serde(default)]
    audios: Vec<String>,
}

#[async_trait]
impl TextToSpeech for SarvamTtsClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TextToSpeechError> {
        let payload = TtsPayload {
            inputs: vec![text],
            target_language_code: &self.voice.language_code,
            speaker: &self.voice.speaker,
            pitch: self.voice.pitch,
            pace: self.voice.pace,
            loudness: self.voice.loudness,
            speech_sample_rate: self.voice.sample_rate,
            enable_preprocessing: false,
            model: &self.voice.model,
        };

        tracing::debug!(endpoint = %self.endpoint, chars = text.len(), "Sending synthesis request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-subscription-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TextToSpeechError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TextToSpeechError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: TtsResponse = response
            .json()
            .await
            .map_err(|e| TextToSpeechError::InvalidPayload(e.to_string()))?;

        let encoded = result.audios.first().ok_or(TextToSpeechError::EmptyAudio)?;

        let audio = BASE64
            .decode(encoded)
            .map_err(|e| TextToSpeechError::InvalidPayload(format!("base64: {}", e)))?;

        tracing::info!(bytes = audio.len(), "Synthesis segment completed");
        Ok(audio)
    }
}
