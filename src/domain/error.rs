use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Every variant is fatal to a polling run.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },

    #[error("no places payload found in response from {url}")]
    NoMatch { url: String },

    #[error("payload is not valid json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
