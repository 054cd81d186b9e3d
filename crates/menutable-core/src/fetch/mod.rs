//! Remote sheet fetching.
//!
//! A single GET per call: no retries, no timeout. The body is only returned
//! for 2xx responses; everything else surfaces as a [`FetchError`] carrying
//! the URL for diagnostics.

mod error;
mod http;

use async_trait::async_trait;

pub use error::FetchError;
pub use http::{get_text, CurlFetcher};

/// Retrieves raw text from a URL.
#[async_trait]
pub trait SheetFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}
