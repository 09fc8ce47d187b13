pub mod llm;
pub mod media;
pub mod observability;
pub mod speech;
pub mod text_processing;
