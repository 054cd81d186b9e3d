//! Error type for sheet fetching.

/// A failed sheet request. Every variant keeps the requested URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection, TLS, ...).
    #[error("request to fetch {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The response had a non-2xx status.
    #[error("request to fetch {url} failed with status code {status}")]
    Status { url: String, status: u32 },
    /// The blocking worker running the transfer panicked or was cancelled.
    #[error("fetch worker for {url} did not complete: {reason}")]
    Aborted { url: String, reason: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Aborted { url, .. } => url,
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
