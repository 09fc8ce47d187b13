use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Narrow interface over the external media tool so the concrete binary is
/// swappable and mockable. Every operation maps to one synchronous tool
/// invocation; callers decide whether a failure is fatal.
#[async_trait]
pub trait MediaTool: Send + Sync {
    /// Transcode `input` into `output` at the given sample rate and channel
    /// count. An absent output file counts as a failure even when the tool
    /// exits cleanly.
    async fn transcode(
        &self,
        input: &Path,
        output: &Path,
        sample_rate: u32,
        channels: u32,
    ) -> Result<(), MediaToolError>;

    /// Total duration of `input` in seconds.
    async fn probe_duration(&self, input: &Path) -> Result<f64, MediaToolError>;

    /// Extract the `[start, end)` window of `input` into `output`,
    /// re-encoded at the given sample rate and channel count.
    async fn trim(
        &self,
        input: &Path,
        output: &Path,
        start: f64,
        end: f64,
        sample_rate: u32,
        channels: u32,
    ) -> Result<(), MediaToolError>;

    /// Concatenate `inputs` in order into `output` via the tool's
    /// manifest-driven concat mode.
    async fn concat(&self, inputs: &[PathBuf], output: &Path) -> Result<(), MediaToolError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaToolError {
    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with {status}: {stderr}")]
    CommandFailed {
        tool: String,
        status: String,
        stderr: String,
    },
    #[error("expected output file missing: {}", .0.display())]
    OutputMissing(PathBuf),
    #[error("unparsable probe output: {0}")]
    ProbeParse(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
