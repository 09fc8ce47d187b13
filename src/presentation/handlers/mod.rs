mod error;
mod generate_response;
mod health;
mod speech_to_text;
mod text_to_speech;

pub use error::ErrorResponse;
pub use generate_response::generate_response_handler;
pub use health::health_handler;
pub use speech_to_text::speech_to_text_handler;
pub use text_to_speech::text_to_speech_handler;
