mod settings;

pub use settings::{
    AudioSettings, ChatSettings, ChunkingSettings, ServerSettings, Settings, SpeechSettings,
};
