//! Fetch error type, split by failure family.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error returned by a fetch.
///
/// Each variant names one failure family (URL construction, transport,
/// gateway status, local storage, runtime) so callers match on kind instead
/// of scraping message text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The gateway base and identifier did not form a valid request URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Network-level failure: connect, DNS, timeout, or mid-body read.
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    /// The gateway answered with a non-2xx status.
    #[error("gateway returned HTTP {code} for {url}")]
    Status { code: u32, url: String },

    /// Local filesystem failure: create, write, sync, or rename.
    #[error("storage failure at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The blocking transfer task could not be joined.
    #[error("transfer task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl FetchError {
    pub(crate) fn storage(path: &std::path::Path, source: io::Error) -> Self {
        FetchError::Storage {
            path: path.to_path_buf(),
            source,
        }
    }
}
