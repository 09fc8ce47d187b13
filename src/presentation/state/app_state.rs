use std::sync::Arc;

use crate::application::ports::{ChatModel, MediaTool, SpeechToText, TextToSpeech};
use crate::application::services::{ChatService, SynthesisService, TranscriptionService};
use crate::presentation::config::Settings;

pub struct AppState<M, S, T, C>
where
    M: MediaTool,
    S: SpeechToText,
    T: TextToSpeech,
    C: ChatModel,
{
    pub transcription_service: Arc<TranscriptionService<M, S>>,
    pub synthesis_service: Arc<SynthesisService<M, T>>,
    pub chat_service: Arc<ChatService<C>>,
    pub settings: Settings,
}

impl<M, S, T, C> Clone for AppState<M, S, T, C>
where
    M: MediaTool,
    S: SpeechToText,
    T: TextToSpeech,
    C: ChatModel,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            synthesis_service: Arc::clone(&self.synthesis_service),
            chat_service: Arc::clone(&self.chat_service),
            settings: self.settings.clone(),
        }
    }
}
