//! Server configuration

use serde::{Deserialize, Serialize};

/// Caption retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionConfig {
    /// Language requested when the client does not name one
    pub default_language: String,

    /// Keep HTML formatting tags in caption text
    pub preserve_formatting: bool,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            preserve_formatting: false,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse a format name, falling back to `Pretty` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Caption configuration
    pub captions: CaptionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_enabled: true,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            captions: CaptionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `EnvFilter` directives derived from `log_level`
    pub fn log_directives(&self) -> String {
        format!(
            "yt_caption_server={level},tower_http={level}",
            level = self.log_level
        )
    }
}
