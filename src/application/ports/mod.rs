mod chat_model;
mod media_tool;
mod speech_to_text;
mod text_splitter;
mod text_to_speech;

pub use chat_model::{ChatModel, ChatModelError};
pub use media_tool::{MediaTool, MediaToolError};
pub use speech_to_text::{SpeechToText, SpeechToTextError};
pub use text_splitter::TextSplitter;
pub use text_to_speech::{TextToSpeech, TextToSpeechError};
