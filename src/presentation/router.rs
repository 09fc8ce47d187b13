use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ChatModel, MediaTool, SpeechToText, TextToSpeech};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    generate_response_handler, health_handler, speech_to_text_handler, text_to_speech_handler,
};
use crate::presentation::state::AppState;

const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn create_router<M, S, T, C>(state: AppState<M, S, T, C>) -> Router
where
    M: MediaTool + 'static,
    S: SpeechToText + 'static,
    T: TextToSpeech + 'static,
    C: ChatModel + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/speech-to-text",
            post(speech_to_text_handler::<M, S, T, C>),
        )
        .route(
            "/api/text-to-speech",
            post(text_to_speech_handler::<M, S, T, C>),
        )
        .route(
            "/api/generate-response",
            post(generate_response_handler::<M, S, T, C>),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
