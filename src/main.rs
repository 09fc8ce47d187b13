use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use vaani::application::services::{ChatService, SynthesisService, TranscriptionService};
use vaani::infrastructure::llm::GeminiClient;
use vaani::infrastructure::media::FfmpegMediaTool;
use vaani::infrastructure::observability::{TracingConfig, init_tracing};
use vaani::infrastructure::speech::{SarvamSttClient, SarvamTtsClient};
use vaani::infrastructure::text_processing::WordPackingSplitter;
use vaani::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    tokio::fs::create_dir_all(&settings.audio.upload_dir).await?;

    let media_tool = Arc::new(FfmpegMediaTool::with_default_binaries());
    let stt_client = Arc::new(SarvamSttClient::new(
        &settings.speech.stt_endpoint,
        &settings.speech.api_key,
        &settings.speech.stt_model,
        &settings.speech.language_code,
    ));
    let tts_client = Arc::new(SarvamTtsClient::new(
        &settings.speech.tts_endpoint,
        &settings.speech.api_key,
        settings.speech.voice.clone(),
    ));
    let chat_model = Arc::new(GeminiClient::new(
        &settings.chat.base_url,
        &settings.chat.model,
        &settings.chat.api_key,
        settings.chat.generation.clone(),
    ));
    let splitter = Arc::new(WordPackingSplitter::new(
        settings.chunking.max_segment_chars,
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::clone(&media_tool),
        stt_client,
        settings.audio.chunk_seconds,
        settings.audio.sample_rate,
        settings.audio.channels,
    ));
    let synthesis_service = Arc::new(SynthesisService::new(
        Arc::clone(&media_tool),
        tts_client,
        splitter,
        settings.audio.upload_dir.clone(),
    ));
    let chat_service = Arc::new(ChatService::new(chat_model));

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);

    let state = AppState {
        transcription_service,
        synthesis_service,
        chat_service,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
