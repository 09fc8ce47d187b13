use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatModel, MediaTool, SpeechToText, TextToSpeech};
use crate::domain::ChatTurn;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ErrorResponse;

#[derive(Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub response: String,
}

#[tracing::instrument(skip(state, request), fields(history_turns = request.history.len()))]
pub async fn generate_response_handler<M, S, T, C>(
    State(state): State<AppState<M, S, T, C>>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse
where
    M: MediaTool + 'static,
    S: SpeechToText + 'static,
    T: TextToSpeech + 'static,
    C: ChatModel + 'static,
{
    if request.text.trim().is_empty() {
        tracing::warn!("Generate request with no text input");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No text input provided")),
        )
            .into_response();
    }

    tracing::debug!(prompt = %sanitize_prompt(&request.text), "Generating chat response");

    let response = state
        .chat_service
        .respond(&request.text, &request.history)
        .await;

    (StatusCode::OK, Json(GenerateResponse { response })).into_response()
}
