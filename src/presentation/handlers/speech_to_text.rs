use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{ChatModel, MediaTool, SpeechToText, TextToSpeech};
use crate::application::services::TranscribeError;
use crate::presentation::state::AppState;

use super::error::ErrorResponse;

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn speech_to_text_handler<M, S, T, C>(
    State(state): State<AppState<M, S, T, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    M: MediaTool + 'static,
    S: SpeechToText + 'static,
    T: TextToSpeech + 'static,
    C: ChatModel + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Speech-to-text request with no audio file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No audio file provided")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_details(
                    "Failed to read multipart",
                    e.to_string(),
                )),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_details(
                    "Failed to read audio file",
                    e.to_string(),
                )),
            )
                .into_response();
        }
    };

    if data.is_empty() {
        tracing::warn!("Uploaded audio file is empty");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Uploaded file is empty")),
        )
            .into_response();
    }

    tracing::debug!(bytes = data.len(), "Audio upload received");

    let upload_dir = &state.settings.audio.upload_dir;
    if let Err(e) = tokio::fs::create_dir_all(upload_dir).await {
        tracing::error!(error = %e, "Failed to create upload directory");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("File upload failed")),
        )
            .into_response();
    }

    let recording = upload_dir.join(format!("recording-{}.webm", Uuid::new_v4()));
    if let Err(e) = tokio::fs::write(&recording, &data).await {
        tracing::error!(error = %e, path = %recording.display(), "Failed to stage recording");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("File upload failed")),
        )
            .into_response();
    }

    match state
        .transcription_service
        .transcribe_recording(&recording)
        .await
    {
        Ok(transcript) => {
            tracing::info!(chars = transcript.len(), "Transcription completed");
            (StatusCode::OK, Json(TranscriptResponse { transcript })).into_response()
        }
        Err(TranscribeError::EmptyRecording) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Uploaded file is empty")),
        )
            .into_response(),
        Err(e @ TranscribeError::Conversion(_)) => {
            tracing::error!(error = %e, "Audio conversion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Error converting audio format",
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}
