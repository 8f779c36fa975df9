use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViralensError {
    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Generation service returned {status}: {reason}")]
    Service { status: u16, reason: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generation response had no usable content: {reason}")]
    EmptyResponse { reason: String },

    #[error("Video {path} is {size} bytes, over the {limit} byte limit")]
    VideoTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Unsupported media file: {path}")]
    UnsupportedMedia { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ViralensError>;
