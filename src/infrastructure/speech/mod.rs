mod sarvam_stt_client;
mod sarvam_tts_client;

pub use sarvam_stt_client::SarvamSttClient;
pub use sarvam_tts_client::{SarvamTtsClient, VoiceStyle};
