//! Transcript sources
//!
//! The caption fetcher sits behind [`TranscriptSource`] so the assembler and
//! the HTTP layer never talk to YouTube directly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::error::{CaptionError, Result};

/// One timed caption segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEntry {
    /// Start offset in seconds
    pub start: f64,
    /// Duration in seconds, zero when the source has none
    #[serde(default)]
    pub duration: f64,
    pub text: String,
}

impl CaptionEntry {
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            duration,
            text: text.into(),
        }
    }

    /// End offset in seconds
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Something that can fetch the captions of a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the caption entries of `video_id` in `language`, in the order
    /// the source returns them.
    async fn fetch(&self, video_id: &str, language: &str) -> Result<Vec<CaptionEntry>>;
}

/// Transcript source backed by `yt-transcript-rs`.
#[derive(Clone)]
pub struct YouTubeTranscriptSource {
    api: YouTubeTranscriptApi,
    preserve_formatting: bool,
}

impl YouTubeTranscriptSource {
    pub fn new(preserve_formatting: bool) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| CaptionError::Client(e.to_string()))?;
        Ok(Self {
            api,
            preserve_formatting,
        })
    }
}

#[async_trait]
impl TranscriptSource for YouTubeTranscriptSource {
    async fn fetch(&self, video_id: &str, language: &str) -> Result<Vec<CaptionEntry>> {
        let transcript = self
            .api
            .fetch_transcript(video_id, &[language], self.preserve_formatting)
            .await
            .map_err(|e| CaptionError::Fetch(e.to_string()))?;

        tracing::debug!(
            "Fetched {} caption snippets for {} ({})",
            transcript.snippets.len(),
            video_id,
            language
        );

        Ok(transcript
            .snippets
            .into_iter()
            .map(|s| CaptionEntry::new(s.start, s.duration, s.text))
            .collect())
    }
}
