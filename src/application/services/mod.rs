mod chat_service;
mod synthesis_service;
mod transcription_service;

pub use chat_service::{APOLOGY_REPLY, ChatService};
pub use synthesis_service::{SynthesisError, SynthesisService};
pub use transcription_service::{TranscribeError, TranscriptionService};
