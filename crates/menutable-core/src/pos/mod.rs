//! POS sheet indexing.
//!
//! Parses the fetched sheet envelope and builds a lookup keyed by the `Id`
//! field of each record. Every failure path here degrades to an empty index
//! plus a warning; nothing is returned to the caller as an error.

mod envelope;
mod error;
mod index;

pub use envelope::{Record, SheetEnvelope, ID_FIELD, SHEET_TYPE};
pub use error::EnvelopeError;
pub use index::PosIndex;

use crate::fetch::SheetFetcher;

/// Parses `text` as a sheet envelope and checks its type discriminator.
pub fn parse_envelope(text: &str) -> Result<SheetEnvelope, EnvelopeError> {
    let envelope: SheetEnvelope = serde_json::from_str(text)?;
    if envelope.kind != SHEET_TYPE {
        return Err(EnvelopeError::WrongType(envelope.kind));
    }
    Ok(envelope)
}

/// Builds the POS index from already-fetched text. `url` is only used for logging.
pub fn build_index(text: &str, url: &str) -> PosIndex {
    match parse_envelope(text) {
        Ok(envelope) => {
            let index = PosIndex::from_records(envelope.data);
            tracing::debug!("indexed {} POS records from {}", index.len(), url);
            index
        }
        Err(err) => {
            tracing::warn!("error while processing sheet {}: {}", url, err);
            PosIndex::new()
        }
    }
}

/// Fetches the sheet at `url` and indexes it; a failed fetch yields an empty index.
pub async fn load_index(fetcher: &dyn SheetFetcher, url: &str) -> PosIndex {
    match fetcher.fetch_text(url).await {
        Ok(text) => build_index(&text, url),
        Err(err) => {
            tracing::warn!("error while processing sheet {}: {}", url, err);
            PosIndex::new()
        }
    }
}
