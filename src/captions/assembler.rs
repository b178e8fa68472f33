//! Caption assembly
//!
//! Turns a YouTube URL into newline-joined `start-end:  text` lines.

use std::sync::Arc;

use super::source::{CaptionEntry, TranscriptSource};
use super::timestamp::format_time;
use super::video_id::extract_video_id;
use crate::error::Result;

/// Render caption entries as `hh:mm:ss-hh:mm:ss:  text` lines.
///
/// Entries keep the order they are given in. Newlines inside a caption are
/// replaced by spaces so that every entry is exactly one line.
pub fn format_captions(entries: &[CaptionEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}-{}:  {}",
                format_time(entry.start),
                format_time(entry.end()),
                entry.text.replace('\n', " ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolves URLs to formatted captions through a [`TranscriptSource`].
#[derive(Clone)]
pub struct CaptionAssembler {
    source: Arc<dyn TranscriptSource>,
    default_language: String,
}

impl CaptionAssembler {
    pub fn new(source: Arc<dyn TranscriptSource>, default_language: impl Into<String>) -> Self {
        Self {
            source,
            default_language: default_language.into(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Fetch and format the captions of the video `youtube_url` points at.
    pub async fn captions_for_url(
        &self,
        youtube_url: &str,
        language: Option<&str>,
    ) -> Result<String> {
        let video_id = extract_video_id(youtube_url)?;
        let language = language
            .filter(|l| !l.is_empty())
            .unwrap_or(self.default_language.as_str());

        tracing::debug!("Fetching captions for {} ({})", video_id, language);

        let entries = self.source.fetch(&video_id, language).await?;
        Ok(format_captions(&entries))
    }
}
