use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::{ChatModel, MediaTool, SpeechToText, TextToSpeech};
use crate::presentation::state::AppState;

use super::error::ErrorResponse;

#[derive(Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: String,
}

#[tracing::instrument(skip(state, request), fields(chars = request.text.len()))]
pub async fn text_to_speech_handler<M, S, T, C>(
    State(state): State<AppState<M, S, T, C>>,
    Json(request): Json<SynthesizeRequest>,
) -> impl IntoResponse
where
    M: MediaTool + 'static,
    S: SpeechToText + 'static,
    T: TextToSpeech + 'static,
    C: ChatModel + 'static,
{
    if request.text.trim().is_empty() {
        tracing::warn!("Text-to-speech request with no text");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No text provided")),
        )
            .into_response();
    }

    let merged = match state.synthesis_service.synthesize_speech(&request.text).await {
        Ok(path) => path,
        Err(e) => {
            tracing::error!(error = %e, "Speech synthesis failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Error merging audio files",
                    e.to_string(),
                )),
            )
                .into_response();
        }
    };

    let bytes = tokio::fs::read(&merged).await;

    if let Err(e) = tokio::fs::remove_file(&merged).await {
        tracing::warn!(error = %e, path = %merged.display(), "Failed to delete merged output");
    }

    match bytes {
        Ok(audio) => {
            tracing::info!(bytes = audio.len(), "Returning synthesized audio");
            ([(header::CONTENT_TYPE, "audio/wav")], audio).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read merged output");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Error sending audio file")),
            )
                .into_response()
        }
    }
}
