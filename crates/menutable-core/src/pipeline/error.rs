//! Error type for the render pipeline.

use crate::block::RowSchemaError;

use super::PipelineState;

/// Unrecovered pipeline failure. POS problems never end up here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("menu block is malformed ({state}): {source}")]
    Structure {
        state: PipelineState,
        #[source]
        source: RowSchemaError,
    },
}
