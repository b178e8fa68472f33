//! Application state
//!
//! Shared, read-only state handed to every request:
//! - Server configuration
//! - Caption assembler (wrapping the transcript source)

use std::sync::Arc;

use crate::captions::{CaptionAssembler, TranscriptSource, YouTubeTranscriptSource};
use crate::config::ServerConfig;
use crate::error::Result;

/// Application state shared across handlers
pub struct AppState {
    pub config: ServerConfig,
    pub assembler: CaptionAssembler,
}

impl AppState {
    /// Create state backed by the YouTube transcript source
    pub fn new(config: ServerConfig) -> Result<Self> {
        let source = YouTubeTranscriptSource::new(config.captions.preserve_formatting)?;
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Create state backed by an arbitrary transcript source
    pub fn with_source(config: ServerConfig, source: Arc<dyn TranscriptSource>) -> Self {
        let assembler = CaptionAssembler::new(source, config.captions.default_language.clone());
        Self { config, assembler }
    }
}
