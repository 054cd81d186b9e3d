//! CLI for the menutable renderer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use menutable_core::config;
use std::path::PathBuf;

use commands::{run_index, run_render, run_resolve};

/// Top-level CLI for menutable.
#[derive(Debug, Parser)]
#[command(name = "menutable")]
#[command(about = "menutable: render menu pages from authored content and live POS data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Render a page description into an HTML document.
    Render {
        /// Path to the page description JSON.
        page: PathBuf,
        /// Write the document here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Fetch a POS sheet and list its index.
    Index {
        /// Absolute URL of the sheet JSON.
        url: String,
    },

    /// Resolve one text value against a POS sheet.
    Resolve {
        /// Text containing a {{SKU<id>.<field>}} placeholder.
        text: String,
        /// Absolute URL of the sheet JSON.
        #[arg(long, value_name = "URL")]
        sheet: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Render { page, out } => run_render(&cfg, &page, out.as_deref()).await?,
            CliCommand::Index { url } => run_index(&url).await?,
            CliCommand::Resolve { text, sheet } => run_resolve(&text, &sheet).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
