//! Pipeline states.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineState {
    Init,
    ParsingStatic,
    FetchingPos,
    Resolving,
    Assembling,
    Activated,
}

impl PipelineState {
    /// Moves to `next`. States only move forward.
    pub(crate) fn advance(&mut self, next: PipelineState) {
        debug_assert!(next > *self, "pipeline cannot go from {} to {}", self, next);
        tracing::debug!("menu pipeline {} -> {}", self, next);
        *self = next;
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PipelineState::Init => "init",
            PipelineState::ParsingStatic => "parsing-static",
            PipelineState::FetchingPos => "fetching-pos",
            PipelineState::Resolving => "resolving",
            PipelineState::Assembling => "assembling",
            PipelineState::Activated => "activated",
        };
        f.write_str(s)
    }
}
