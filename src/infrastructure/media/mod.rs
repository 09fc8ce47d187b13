mod ffmpeg_tool;
mod mock_media_tool;

pub use ffmpeg_tool::FfmpegMediaTool;
pub use mock_media_tool::MockMediaTool;
