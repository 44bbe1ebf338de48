use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    Config { key: String, source: String },
    InvalidEndpointTemplate { template: String },
    UnknownButton { post_pk: String },
    Transport { source: String },
    Timeout { url: String },
    UnexpectedStatus { url: String, status: u16 },
    MalformedResponse { source: String },
}

/// Any error raised while toggling a like, before it reaches the view.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::Config { key, source } => write!(f, "Invalid config {key} - {source}"),
            Self::InvalidEndpointTemplate { template } => {
                write!(f, "Endpoint template {template} needs exactly one `num` segment")
            }
            Self::UnknownButton { post_pk } => write!(f, "No like button for post {post_pk}"),
            Self::Transport { source } => write!(f, "Request failed - {source}"),
            Self::Timeout { url } => write!(f, "Request to {url} timed out"),
            Self::UnexpectedStatus { url, status } => {
                write!(f, "Request to {url} returned status {status}")
            }
            Self::MalformedResponse { source } => write!(f, "Malformed response - {source}"),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            return AppError::Timeout {
                url: value.url().map(|u| u.to_string()).unwrap_or_default(),
            };
        }
        if value.is_decode() {
            return AppError::MalformedResponse {
                source: value.to_string(),
            };
        }
        AppError::Transport {
            source: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::MalformedResponse {
            source: value.to_string(),
        }
    }
}
