/// One time window of canonical audio, in seconds from the start of the file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkWindow {
    pub start: f64,
    pub end: f64,
}

impl ChunkWindow {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Plans contiguous, non-overlapping windows covering `[0, duration)`,
/// stepping by `chunk_seconds`. The final window may be shorter than the
/// step. Non-positive inputs yield no windows.
pub fn plan_windows(duration: f64, chunk_seconds: f64) -> Vec<ChunkWindow> {
    let mut windows = Vec::new();
    if duration <= 0.0 || chunk_seconds <= 0.0 {
        return windows;
    }

    let mut start = 0.0;
    while start < duration {
        let end = (start + chunk_seconds).min(duration);
        windows.push(ChunkWindow { start, end });
        start += chunk_seconds;
    }

    windows
}
