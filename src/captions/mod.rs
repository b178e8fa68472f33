//! Caption extraction
//!
//! - Video id extraction from YouTube URLs
//! - `hh:mm:ss` timestamp formatting
//! - Transcript source abstraction over the caption fetcher
//! - Assembly of timestamped caption lines

pub mod assembler;
pub mod source;
pub mod timestamp;
pub mod video_id;

pub use assembler::CaptionAssembler;
pub use source::{TranscriptSource, YouTubeTranscriptSource};
