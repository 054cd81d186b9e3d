//! CLI command handlers, one per file.

mod index;
mod render;
mod resolve;

pub use index::run_index;
pub use render::run_render;
pub use resolve::run_resolve;
