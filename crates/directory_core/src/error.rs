use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = DirectoryError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("roster body from {origin} is not a doctor list: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read roster file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid url {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DirectoryError {
    pub fn invalid_url(input: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            input: input.into(),
            source,
        }
    }
}
