use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{MediaTool, MediaToolError};

/// `MediaTool` backed by the `ffmpeg`/`ffprobe` binaries on the PATH.
/// Binary names are injectable so deployments can point at pinned builds.
pub struct FfmpegMediaTool {
    ffmpeg_bin: String,
    ffprobe_bin: String,
}

impl FfmpegMediaTool {
    pub fn new(ffmpeg_bin: impl Into<String>, ffprobe_bin: impl Into<String>) -> Self {
        Self {
            ffmpeg_bin: ffmpeg_bin.into(),
            ffprobe_bin: ffprobe_bin.into(),
        }
    }

    pub fn with_default_binaries() -> Self {
        Self::new("ffmpeg", "ffprobe")
    }

    async fn run(tool: &str, cmd: &mut Command) -> Result<std::process::Output, MediaToolError> {
        let output = cmd
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| MediaToolError::Spawn {
                tool: tool.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(MediaToolError::CommandFailed {
                tool: tool.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }

    async fn ensure_output(path: &Path) -> Result<(), MediaToolError> {
        match tokio::fs::try_exists(path).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MediaToolError::OutputMissing(path.to_path_buf())),
            Err(e) => Err(MediaToolError::Io(e)),
        }
    }
}

#[async_trait]
impl MediaTool for FfmpegMediaTool {
    async fn transcode(
        &self,
        input: &Path,
        output: &Path,
        sample_rate: u32,
        channels: u32,
    ) -> Result<(), MediaToolError> {
        tracing::debug!(input = %input.display(), output = %output.display(), "Transcoding recording");

        let mut cmd = Command::new(&self.ffmpeg_bin);
        cmd.args(["-y", "-v", "error", "-i"])
            .arg(input)
            .args(["-ar", &sample_rate.to_string(), "-ac", &channels.to_string()])
            .arg(output);

        Self::run(&self.ffmpeg_bin, &mut cmd).await?;
        Self::ensure_output(output).await
    }

    async fn probe_duration(&self, input: &Path) -> Result<f64, MediaToolError> {
        let mut cmd = Command::new(&self.ffprobe_bin);
        cmd.args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(input);

        let output = Self::run(&self.ffprobe_bin, &mut cmd).await?;
        let raw = String::from_utf8_lossy(&output.stdout).trim().to_string();

        raw.parse::<f64>()
            .map_err(|_| MediaToolError::ProbeParse(raw))
    }

    async fn trim(
        &self,
        input: &Path,
        output: &Path,
        start: f64,
        end: f64,
        sample_rate: u32,
        channels: u32,
    ) -> Result<(), MediaToolError> {
        let mut cmd = Command::new(&self.ffmpeg_bin);
        cmd.args(["-y", "-v", "error", "-i"])
            .arg(input)
            .args(["-ss", &start.to_string(), "-to", &end.to_string()])
            .args(["-ar", &sample_rate.to_string(), "-ac", &channels.to_string()])
            .arg(output);

        Self::run(&self.ffmpeg_bin, &mut cmd).await?;
        Self::ensure_output(output).await
    }

    async fn concat(&self, inputs: &[PathBuf], output: &Path) -> Result<(), MediaToolError> {
        let manifest = output.with_extension("txt");
        let mut listing = String::new();
        for input in inputs {
            listing.push_str(&format!("file '{}'\n", input.display()));
        }
        tokio::fs::write(&manifest, listing).await?;

        let mut cmd = Command::new(&self.ffmpeg_bin);
        cmd.args(["-y", "-v", "error", "-f", "concat", "-safe", "0", "-i"])
            .arg(&manifest)
            .args(["-c", "copy"])
            .arg(output);

        let result = Self::run(&self.ffmpeg_bin, &mut cmd).await;

        if let Err(e) = tokio::fs::remove_file(&manifest).await {
            tracing::warn!(error = %e, "Failed to delete concat manifest");
        }

        result?;
        Self::ensure_output(output).await
    }
}
