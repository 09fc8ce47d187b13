use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use vaani::application::ports::{
    SpeechToText, SpeechToTextError, TextToSpeech, TextToSpeechError,
};
use vaani::application::services::{
    SynthesisError, SynthesisService, TranscribeError, TranscriptionService,
};
use vaani::infrastructure::media::MockMediaTool;
use vaani::infrastructure::text_processing::WordPackingSplitter;

const CHUNK_SECONDS: f64 = 30.0;
const SAMPLE_RATE: u32 = 16_000;
const CHANNELS: u32 = 1;

struct FixedSpeechToText {
    text: &'static str,
}

#[async_trait::async_trait]
impl SpeechToText for FixedSpeechToText {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String, SpeechToTextError> {
        Ok(self.text.to_string())
    }
}

struct FailingSpeechToText;

#[async_trait::async_trait]
impl SpeechToText for FailingSpeechToText {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String, SpeechToTextError> {
        Err(SpeechToTextError::ApiRequestFailed("mock outage".to_string()))
    }
}

struct FixedTextToSpeech {
    audio: Vec<u8>,
}

#[async_trait::async_trait]
impl TextToSpeech for FixedTextToSpeech {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, TextToSpeechError> {
        Ok(self.audio.clone())
    }
}

struct EmptyPayloadTextToSpeech;

#[async_trait::async_trait]
impl TextToSpeech for EmptyPayloadTextToSpeech {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, TextToSpeechError> {
        Ok(Vec::new())
    }
}

struct NoAudioTextToSpeech;

#[async_trait::async_trait]
impl TextToSpeech for NoAudioTextToSpeech {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, TextToSpeechError> {
        Err(TextToSpeechError::EmptyAudio)
    }
}

/// Fails the first call, succeeds afterwards.
struct FlakyTextToSpeech {
    calls: AtomicUsize,
    audio: Vec<u8>,
}

#[async_trait::async_trait]
impl TextToSpeech for FlakyTextToSpeech {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, TextToSpeechError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(TextToSpeechError::ApiRequestFailed("mock outage".to_string()))
        } else {
            Ok(self.audio.clone())
        }
    }
}

fn transcription_service<S: SpeechToText>(
    media_tool: Arc<MockMediaTool>,
    stt: S,
) -> TranscriptionService<MockMediaTool, S> {
    TranscriptionService::new(media_tool, Arc::new(stt), CHUNK_SECONDS, SAMPLE_RATE, CHANNELS)
}

#[tokio::test]
async fn given_long_recording_when_transcribing_then_joins_chunk_transcripts_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let recording = dir.path().join("recording-test.webm");
    tokio::fs::write(&recording, b"fake webm bytes").await.unwrap();

    let media_tool = Arc::new(MockMediaTool::with_duration(65.0));
    let service = transcription_service(Arc::clone(&media_tool), FixedSpeechToText { text: "hello" });

    let transcript = service.transcribe_recording(&recording).await.unwrap();

    // 65s at 30s windows: three chunks
    assert_eq!(transcript, "hello hello hello");
    assert!(!recording.exists(), "recording must be deleted");
    assert!(
        !recording.with_extension("wav").exists(),
        "canonical audio must be deleted"
    );
}

#[tokio::test]
async fn given_probe_failure_when_transcribing_then_returns_empty_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let recording = dir.path().join("recording-test.webm");
    tokio::fs::write(&recording, b"fake webm bytes").await.unwrap();

    let media_tool = Arc::new(MockMediaTool::default().failing_probe());
    let service = transcription_service(media_tool, FixedSpeechToText { text: "hello" });

    let transcript = service.transcribe_recording(&recording).await.unwrap();

    assert_eq!(transcript, "");
}

#[tokio::test]
async fn given_conversion_failure_when_transcribing_then_returns_conversion_error() {
    let dir = tempfile::tempdir().unwrap();
    let recording = dir.path().join("recording-test.webm");
    tokio::fs::write(&recording, b"fake webm bytes").await.unwrap();

    let media_tool = Arc::new(MockMediaTool::default().failing_transcode());
    let service = transcription_service(media_tool, FixedSpeechToText { text: "hello" });

    let result = service.transcribe_recording(&recording).await;

    assert!(matches!(result, Err(TranscribeError::Conversion(_))));
}

#[tokio::test]
async fn given_empty_recording_when_transcribing_then_rejects_without_tool_invocation() {
    let dir = tempfile::tempdir().unwrap();
    let recording = dir.path().join("recording-test.webm");
    tokio::fs::write(&recording, b"").await.unwrap();

    let media_tool = Arc::new(MockMediaTool::default());
    let service = transcription_service(Arc::clone(&media_tool), FixedSpeechToText { text: "hello" });

    let result = service.transcribe_recording(&recording).await;

    assert!(matches!(result, Err(TranscribeError::EmptyRecording)));
    assert_eq!(media_tool.invocations(), 0);
}

#[tokio::test]
async fn given_vendor_outage_when_transcribing_then_degrades_to_empty_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let recording = dir.path().join("recording-test.webm");
    tokio::fs::write(&recording, b"fake webm bytes").await.unwrap();

    let media_tool = Arc::new(MockMediaTool::with_duration(10.0));
    let service = transcription_service(media_tool, FailingSpeechToText);

    let transcript = service.transcribe_recording(&recording).await.unwrap();

    assert_eq!(transcript, "");
}

fn synthesis_service<T: TextToSpeech>(
    media_tool: Arc<MockMediaTool>,
    tts: T,
    max_chars: usize,
    output_dir: std::path::PathBuf,
) -> SynthesisService<MockMediaTool, T> {
    SynthesisService::new(
        media_tool,
        Arc::new(tts),
        Arc::new(WordPackingSplitter::new(max_chars)),
        output_dir,
    )
}

#[tokio::test]
async fn given_text_when_synthesizing_then_returns_merged_file_and_deletes_segments() {
    let dir = tempfile::tempdir().unwrap();
    let media_tool = Arc::new(MockMediaTool::default());
    let service = synthesis_service(
        media_tool,
        FixedTextToSpeech {
            audio: b"RIFF-segment".to_vec(),
        },
        500,
        dir.path().to_path_buf(),
    );

    let merged = service.synthesize_speech("a short reply").await.unwrap();

    let bytes = tokio::fs::read(&merged).await.unwrap();
    assert_eq!(bytes, b"RIFF-segment");

    // only the merged output remains in the directory
    let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
    let mut remaining = Vec::new();
    while let Some(entry) = entries.next_entry().await.unwrap() {
        remaining.push(entry.path());
    }
    assert_eq!(remaining, vec![merged]);
}

#[tokio::test]
async fn given_multiple_segments_when_one_fails_then_remaining_segments_still_merge() {
    let dir = tempfile::tempdir().unwrap();
    let media_tool = Arc::new(MockMediaTool::default());
    let service = synthesis_service(
        media_tool,
        FlakyTextToSpeech {
            calls: AtomicUsize::new(0),
            audio: b"survivor".to_vec(),
        },
        5,
        dir.path().to_path_buf(),
    );

    // two words over a 5-char budget force two segments
    let merged = service.synthesize_speech("aaaa bbbb").await.unwrap();

    let bytes = tokio::fs::read(&merged).await.unwrap();
    assert_eq!(bytes, b"survivor");
}

#[tokio::test]
async fn given_zero_length_payloads_when_synthesizing_then_nothing_to_merge() {
    let dir = tempfile::tempdir().unwrap();
    let media_tool = Arc::new(MockMediaTool::default());
    let service = synthesis_service(
        media_tool,
        EmptyPayloadTextToSpeech,
        500,
        dir.path().to_path_buf(),
    );

    let result = service.synthesize_speech("some text").await;

    assert!(matches!(result, Err(SynthesisError::NothingToMerge)));

    // the zero-length segment files must not linger
    let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
    assert!(entries.next_entry().await.unwrap().is_none());
}

#[tokio::test]
async fn given_vendor_returning_no_audio_when_synthesizing_then_nothing_to_merge() {
    let dir = tempfile::tempdir().unwrap();
    let media_tool = Arc::new(MockMediaTool::default());
    let service = synthesis_service(media_tool, NoAudioTextToSpeech, 500, dir.path().to_path_buf());

    let result = service.synthesize_speech("some text").await;

    assert!(matches!(result, Err(SynthesisError::NothingToMerge)));
}

#[tokio::test]
async fn given_merge_failure_when_synthesizing_then_returns_merge_error_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let media_tool = Arc::new(MockMediaTool::default().failing_concat());
    let service = synthesis_service(
        media_tool,
        FixedTextToSpeech {
            audio: b"RIFF-segment".to_vec(),
        },
        500,
        dir.path().to_path_buf(),
    );

    let result = service.synthesize_speech("some text").await;

    assert!(matches!(result, Err(SynthesisError::Merge(_))));

    let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
    assert!(
        entries.next_entry().await.unwrap().is_none(),
        "segment files must be deleted after a failed merge"
    );
}
