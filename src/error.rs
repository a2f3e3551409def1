use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading static content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while fetching an asset payload
///
/// None of these reach the user; callers log them and keep the placeholder.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Asset {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Asset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a playable animation: {0}")]
    InvalidAnimation(String),
}

/// Errors raised while parsing a route path
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route '{0}'. Use home, about, resume, redesigns, project/<id> or work/<id>")]
    Unknown(String),

    #[error("Route '{0}' needs an id, e.g. {0}/<id>")]
    MissingId(String),
}
