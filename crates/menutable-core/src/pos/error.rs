//! Error type for sheet envelope parsing.

/// Why a fetched body could not be used as a sheet envelope.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// Body is not JSON, or not shaped like an envelope.
    #[error("invalid sheet JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// The `:type` discriminator is not `sheet`.
    #[error("invalid sheet type: {0:?}")]
    WrongType(String),
}
