use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{MediaTool, MediaToolError, TextSplitter, TextToSpeech};

/// Text-to-speech pipeline: split the text into vendor-sized segments,
/// synthesize each one in order, and merge the surviving segment files into
/// a single output.
///
/// Segment failures are isolated; a failed or empty segment is skipped and
/// the rest are still attempted. Only "nothing survived" and merge failure
/// are fatal.
pub struct SynthesisService<M, T>
where
    M: MediaTool,
    T: TextToSpeech,
{
    media_tool: Arc<M>,
    tts_client: Arc<T>,
    splitter: Arc<dyn TextSplitter>,
    output_dir: PathBuf,
}

impl<M, T> SynthesisService<M, T>
where
    M: MediaTool,
    T: TextToSpeech,
{
    pub fn new(
        media_tool: Arc<M>,
        tts_client: Arc<T>,
        splitter: Arc<dyn TextSplitter>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            media_tool,
            tts_client,
            splitter,
            output_dir,
        }
    }

    /// Returns the path of the merged audio file. The caller owns the file
    /// and deletes it after transmission.
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn synthesize_speech(&self, text: &str) -> Result<PathBuf, SynthesisError> {
        let segments = self.splitter.split(text);
        tracing::debug!(segments = segments.len(), "Split text for synthesis");

        let request_id = Uuid::new_v4();
        let mut segment_files: Vec<PathBuf> = Vec::with_capacity(segments.len());
        for (index, segment) in segments.iter().enumerate() {
            if let Some(path) = self.synthesize_segment(segment, request_id, index).await {
                segment_files.push(path);
            }
        }

        if segment_files.is_empty() {
            return Err(SynthesisError::NothingToMerge);
        }

        let merged = self.output_dir.join(format!("tts-{}-merged.wav", request_id));
        let result = self.media_tool.concat(&segment_files, &merged).await;

        for file in &segment_files {
            if let Err(e) = tokio::fs::remove_file(file).await {
                tracing::warn!(error = %e, path = %file.display(), "Failed to delete segment file");
            }
        }

        match result {
            Ok(()) => {
                tracing::info!(segments = segment_files.len(), output = %merged.display(), "Merged synthesized audio");
                Ok(merged)
            }
            Err(e) => Err(SynthesisError::Merge(e)),
        }
    }

    async fn synthesize_segment(
        &self,
        segment: &str,
        request_id: Uuid,
        index: usize,
    ) -> Option<PathBuf> {
        let audio = match self.tts_client.synthesize(segment).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, segment = index, "Text-to-speech call failed, skipping segment");
                return None;
            }
        };

        let path = self.output_dir.join(format!("tts-{}-{}.wav", request_id, index));
        if let Err(e) = tokio::fs::write(&path, &audio).await {
            tracing::error!(error = %e, path = %path.display(), "Failed to write segment file");
            return None;
        }

        let len = tokio::fs::metadata(&path)
            .await
            .map(|m| m.len())
            .unwrap_or(0);
        if len == 0 {
            tracing::warn!(segment = index, "Synthesized segment is empty, discarding");
            let _ = tokio::fs::remove_file(&path).await;
            return None;
        }

        Some(path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("no synthesized segments to merge")]
    NothingToMerge,
    #[error("audio merge failed: {0}")]
    Merge(MediaToolError),
}
