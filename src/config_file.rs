//! Configuration file support
//!
//! Loads server configuration from TOML files. Every section is optional;
//! anything left out keeps its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{CaptionConfig, LogFormat, ServerConfig};
use crate::error::{CaptionError, Result};

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: Option<ServerSettings>,
    /// Caption settings
    pub captions: Option<CaptionSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS
    pub cors_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionSettings {
    /// Language requested when the client does not name one
    pub default_language: Option<String>,
    /// Keep HTML formatting tags in caption text
    pub preserve_formatting: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| CaptionError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CaptionError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            server: Some(ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8000,
                cors_enabled: Some(true),
            }),
            captions: Some(CaptionSettings {
                default_language: Some("en".to_string()),
                preserve_formatting: Some(false),
            }),
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
        }
    }

    /// Convert to ServerConfig
    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();

        let (host, port, cors_enabled) = match self.server {
            Some(s) => (s.host, s.port, s.cors_enabled.unwrap_or(defaults.cors_enabled)),
            None => (defaults.host, defaults.port, defaults.cors_enabled),
        };

        let (log_level, log_format) = match self.logging {
            Some(l) => (
                l.level,
                l.format
                    .as_deref()
                    .map(LogFormat::from_name)
                    .unwrap_or(defaults.log_format),
            ),
            None => (defaults.log_level, defaults.log_format),
        };

        let captions = match self.captions {
            Some(c) => CaptionConfig {
                default_language: c
                    .default_language
                    .unwrap_or(defaults.captions.default_language),
                preserve_formatting: c
                    .preserve_formatting
                    .unwrap_or(defaults.captions.preserve_formatting),
            },
            None => defaults.captions,
        };

        ServerConfig {
            host,
            port,
            cors_enabled,
            log_level,
            log_format,
            captions,
        }
    }
}

/// Load the server configuration from `path`. A missing file yields the
/// defaults; an unreadable or malformed one is an error.
pub fn load_server_config<P: AsRef<Path>>(path: P) -> Result<ServerConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(ServerConfig::default());
    }
    Ok(ConfigFile::from_file(path)?.into_server_config())
}
