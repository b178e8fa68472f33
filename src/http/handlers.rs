//! HTTP request handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::CaptionError;
use crate::state::AppState;

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    /// Caption extraction failed, for whatever reason
    BadRequest(String),
    /// A required query parameter was not supplied
    MissingParameter(&'static str),
}

/// JSON error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::MissingParameter(name) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Missing required query parameter: {}", name),
            ),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<CaptionError> for HttpError {
    fn from(err: CaptionError) -> Self {
        HttpError::BadRequest(err.to_string())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

/// Query parameters of the captions endpoint
#[derive(Debug, Default, PartialEq)]
pub struct CaptionsQuery {
    /// Full YouTube video URL
    pub youtube_url: Option<String>,
    /// Caption language, defaults to the configured language
    pub language: Option<String>,
}

impl CaptionsQuery {
    /// Collect the known parameters from decoded query pairs. A repeated
    /// parameter keeps its last value; unknown parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = CaptionsQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "youtube_url" => query.youtube_url = Some(value),
                "language" => query.language = Some(value),
                _ => {}
            }
        }
        query
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CaptionsResponse {
    pub captions: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Root endpoint
/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "YouTube Caption Extractor API".to_string(),
    })
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("yt-caption-server v", env!("CARGO_PKG_VERSION"))
}

/// Captions endpoint
/// GET /captions/?youtube_url=<url>[&language=<tag>]
pub async fn extract_captions(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CaptionsResponse>, HttpError> {
    let Query(pairs) = pairs?;
    let query = CaptionsQuery::from_pairs(pairs);

    let youtube_url = query
        .youtube_url
        .ok_or(HttpError::MissingParameter("youtube_url"))?;

    let captions = state
        .assembler
        .captions_for_url(&youtube_url, query.language.as_deref())
        .await
        .map_err(|e| {
            tracing::warn!("Caption extraction failed for {}: {}", youtube_url, e);
            HttpError::from(e)
        })?;

    Ok(Json(CaptionsResponse { captions }))
}
