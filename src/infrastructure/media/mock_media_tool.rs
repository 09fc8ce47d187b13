use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{MediaTool, MediaToolError};

/// Test double for the media tool port. Writes small placeholder files where
/// the real tool would produce audio, with switchable failure modes and an
/// invocation counter so tests can assert the tool was never reached.
pub struct MockMediaTool {
    duration: f64,
    fail_transcode: bool,
    fail_probe: bool,
    fail_concat: bool,
    invocations: AtomicUsize,
}

impl MockMediaTool {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn failing_transcode(mut self) -> Self {
        self.fail_transcode = true;
        self
    }

    pub fn failing_probe(mut self) -> Self {
        self.fail_probe = true;
        self
    }

    pub fn failing_concat(mut self) -> Self {
        self.fail_concat = true;
        self
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.invocations.fetch_add(1, Ordering::SeqCst);
    }

    fn command_failed(what: &str) -> MediaToolError {
        MediaToolError::CommandFailed {
            tool: "mock".to_string(),
            status: "exit status: 1".to_string(),
            stderr: what.to_string(),
        }
    }
}

impl Default for MockMediaTool {
    fn default() -> Self {
        Self {
            duration: 10.0,
            fail_transcode: false,
            fail_probe: false,
            fail_concat: false,
            invocations: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MediaTool for MockMediaTool {
    async fn transcode(
        &self,
        _input: &Path,
        output: &Path,
        _sample_rate: u32,
        _channels: u32,
    ) -> Result<(), MediaToolError> {
        self.record();
        if self.fail_transcode {
            return Err(Self::command_failed("transcode"));
        }
        tokio::fs::write(output, b"RIFF-mock-canonical").await?;
        Ok(())
    }

    async fn probe_duration(&self, _input: &Path) -> Result<f64, MediaToolError> {
        self.record();
        if self.fail_probe {
            return Err(MediaToolError::ProbeParse("mock probe failure".to_string()));
        }
        Ok(self.duration)
    }

    async fn trim(
        &self,
        _input: &Path,
        output: &Path,
        start: f64,
        end: f64,
        _sample_rate: u32,
        _channels: u32,
    ) -> Result<(), MediaToolError> {
        self.record();
        tokio::fs::write(output, format!("chunk {}..{}", start, end)).await?;
        Ok(())
    }

    async fn concat(&self, inputs: &[PathBuf], output: &Path) -> Result<(), MediaToolError> {
        self.record();
        if self.fail_concat {
            return Err(Self::command_failed("concat"));
        }
        let mut merged = Vec::new();
        for input in inputs {
            merged.extend(tokio::fs::read(input).await?);
        }
        tokio::fs::write(output, merged).await?;
        Ok(())
    }
}
