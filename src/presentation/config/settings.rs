use std::path::PathBuf;

use crate::infrastructure::llm::GenerationStyle;
use crate::infrastructure::speech::VoiceStyle;

/// All runtime configuration, read once from the environment and passed
/// into adapters at construction. No adapter reads ambient process state.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub audio: AudioSettings,
    pub chunking: ChunkingSettings,
    pub speech: SpeechSettings,
    pub chat: ChatSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AudioSettings {
    pub upload_dir: PathBuf,
    pub chunk_seconds: f64,
    pub sample_rate: u32,
    pub channels: u32,
}

#[derive(Debug, Clone)]
pub struct ChunkingSettings {
    pub max_segment_chars: usize,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub api_key: String,
    pub stt_endpoint: String,
    pub tts_endpoint: String,
    pub stt_model: String,
    pub language_code: String,
    pub voice: VoiceStyle,
}

#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub generation: GenerationStyle,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: var_or("HOST", "0.0.0.0"),
                port: parsed_var("PORT", 5000),
            },
            audio: AudioSettings {
                upload_dir: PathBuf::from(var_or("UPLOAD_DIR", "uploads")),
                chunk_seconds: parsed_var("CHUNK_SECONDS", 30.0),
                sample_rate: 16_000,
                channels: 1,
            },
            chunking: ChunkingSettings {
                max_segment_chars: parsed_var("TTS_MAX_SEGMENT_CHARS", 500),
            },
            speech: SpeechSettings {
                api_key: var_or("SARVAM_API_KEY", ""),
                stt_endpoint: var_or("SARVAM_STT_URL", "https://api.sarvam.ai/speech-to-text"),
                tts_endpoint: var_or("SARVAM_TTS_URL", "https://api.sarvam.ai/text-to-speech"),
                stt_model: "saarika:v2".to_string(),
                language_code: "en-IN".to_string(),
                voice: VoiceStyle::default(),
            },
            chat: ChatSettings {
                api_key: var_or("GOOGLE_API_KEY", ""),
                base_url: var_or(
                    "GEMINI_BASE_URL",
                    "https://generativelanguage.googleapis.com/v1beta",
                ),
                model: var_or("GEMINI_MODEL", "gemini-2.0-flash"),
                generation: GenerationStyle::default(),
            },
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
