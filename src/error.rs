//! Error types for fetching, mapping and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// The source text could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid source {0:?}")]
    InvalidSource(String),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from HTML: {0}")]
    Html(String),
}

/// The visualizer could not write its output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write chart")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report")]
    Json(#[from] serde_json::Error),
}

/// Any failure that aborts a run. An empty result is not an error.
#[derive(Debug, Error)]
pub enum WordCountError {
    #[error("could not fetch text")]
    Fetch(#[from] FetchError),

    #[error("tokenization of fragment {fragment} failed: {message}")]
    Tokenization { fragment: usize, message: String },

    #[error("worker task was cancelled")]
    Join(#[from] tokio::task::JoinError),

    #[error("worker pool closed")]
    PoolClosed(#[from] tokio::sync::AcquireError),

    #[error("could not render results")]
    Render(#[from] RenderError),
}

/// Render an error with its whole `source()` chain, one cause per line.
pub fn report(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = format!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    out
}
