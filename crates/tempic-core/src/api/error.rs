//! Errors returned by the API client.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout and the like.
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// Body was not the JSON shape the endpoint documents.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Well-formed response whose status is not `success`.
    #[error("server answered with status {status:?}")]
    Rejected { status: Option<String> },
    /// libcurl refused to assemble the multipart form.
    #[error("could not build upload form: {0}")]
    Form(#[from] curl::FormError),
    #[error("response is missing the {0} field")]
    MissingField(&'static str),
    #[error("cannot read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// True when the server could not be talked to at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
