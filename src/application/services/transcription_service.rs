use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{MediaTool, MediaToolError, SpeechToText};
use crate::domain::{ChunkWindow, plan_windows};

/// Upload-to-transcript pipeline: canonicalize the recording, window it,
/// transcribe each window in order, and join the results.
///
/// The service owns every file it touches and deletes intermediates as soon
/// as the next stage has consumed them. Per-window failures degrade to empty
/// text; only conversion failure is fatal.
pub struct TranscriptionService<M, S>
where
    M: MediaTool,
    S: SpeechToText,
{
    media_tool: Arc<M>,
    stt_client: Arc<S>,
    chunk_seconds: f64,
    sample_rate: u32,
    channels: u32,
}

impl<M, S> TranscriptionService<M, S>
where
    M: MediaTool,
    S: SpeechToText,
{
    pub fn new(
        media_tool: Arc<M>,
        stt_client: Arc<S>,
        chunk_seconds: f64,
        sample_rate: u32,
        channels: u32,
    ) -> Self {
        Self {
            media_tool,
            stt_client,
            chunk_seconds,
            sample_rate,
            channels,
        }
    }

    #[tracing::instrument(skip(self, recording), fields(recording = %recording.display()))]
    pub async fn transcribe_recording(&self, recording: &Path) -> Result<String, TranscribeError> {
        let size = tokio::fs::metadata(recording)
            .await
            .map(|m| m.len())
            .unwrap_or(0);
        if size == 0 {
            return Err(TranscribeError::EmptyRecording);
        }

        let canonical = recording.with_extension("wav");
        let converted = self
            .media_tool
            .transcode(recording, &canonical, self.sample_rate, self.channels)
            .await;

        if let Err(e) = tokio::fs::remove_file(recording).await {
            tracing::warn!(error = %e, "Failed to delete uploaded recording");
        }

        if let Err(e) = converted {
            return Err(TranscribeError::Conversion(e));
        }

        let transcript = self.transcribe_canonical(&canonical).await;

        if let Err(e) = tokio::fs::remove_file(&canonical).await {
            tracing::warn!(error = %e, "Failed to delete canonical audio");
        }

        Ok(transcript)
    }

    async fn transcribe_canonical(&self, canonical: &Path) -> String {
        let duration = match self.media_tool.probe_duration(canonical).await {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(error = %e, "Duration probe failed, nothing to transcribe");
                return String::new();
            }
        };

        let windows = plan_windows(duration, self.chunk_seconds);
        tracing::debug!(
            duration_secs = duration,
            chunks = windows.len(),
            "Planned transcription windows"
        );

        let mut parts: Vec<String> = Vec::with_capacity(windows.len());
        for (index, window) in windows.iter().enumerate() {
            let chunk_path = chunk_path_for(canonical, index);
            let text = self.transcribe_window(canonical, &chunk_path, window).await;
            if !text.is_empty() {
                parts.push(text);
            }
            let _ = tokio::fs::remove_file(&chunk_path).await;
        }

        parts.join(" ").trim().to_string()
    }

    async fn transcribe_window(
        &self,
        canonical: &Path,
        chunk_path: &Path,
        window: &ChunkWindow,
    ) -> String {
        if let Err(e) = self
            .media_tool
            .trim(
                canonical,
                chunk_path,
                window.start,
                window.end,
                self.sample_rate,
                self.channels,
            )
            .await
        {
            tracing::warn!(error = %e, start = window.start, "Chunk extraction failed, skipping window");
            return String::new();
        }

        let bytes = match tokio::fs::read(chunk_path).await {
            Ok(b) if !b.is_empty() => b,
            Ok(_) => {
                tracing::warn!(path = %chunk_path.display(), "Chunk file is empty, skipping");
                return String::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %chunk_path.display(), "Chunk file unreadable, skipping");
                return String::new();
            }
        };

        match self.stt_client.transcribe(&bytes).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::error!(error = %e, start = window.start, "Speech-to-text call failed for chunk");
                String::new()
            }
        }
    }
}

fn chunk_path_for(canonical: &Path, index: usize) -> PathBuf {
    let stem = canonical
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string());
    let parent = canonical.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{}-chunk-{}.wav", stem, index))
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("recording is missing or empty")]
    EmptyRecording,
    #[error("audio conversion failed: {0}")]
    Conversion(MediaToolError),
}
