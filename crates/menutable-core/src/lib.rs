pub mod config;
pub mod logging;

// Pipeline stages, leaf first.
pub mod fetch;
pub mod pos;
pub mod block;
pub mod placeholder;
pub mod render;
pub mod pipeline;

// Host collaborators.
pub mod metadata;
pub mod page;
pub mod picture;
pub mod qr;
pub mod shell;
