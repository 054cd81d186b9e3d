//! Menu render pipeline.
//!
//! `Init → ParsingStatic ∥ FetchingPos → Resolving → Assembling → Activated`.
//! Static parsing and the POS load overlap; resolution and assembly run once
//! both are done. Only POS failures are recovered (as an empty index); a
//! malformed block stops the run after `Init`, leaving the page hidden with
//! an empty container.

mod error;
mod state;

use std::sync::Arc;
use tokio::task::JoinHandle;
use url::Url;

use crate::block::{self, Block};
use crate::config::MenuTableConfig;
use crate::fetch::SheetFetcher;
use crate::metadata::{PageMetadata, BACKGROUND, PRODUCT_DATA_SOURCE};
use crate::picture::ImageOptimizer;
use crate::placeholder;
use crate::pos::{self, PosIndex};
use crate::qr::{QrActivator, QrError, QrMount, QrPayload};
use crate::render::{self, MenuHeader, QR_MOUNT_CLASS};
use crate::shell::PageShell;

pub use error::PipelineError;
pub use state::PipelineState;

/// Collaborators the pipeline runs against.
#[derive(Clone)]
pub struct Capabilities {
    pub metadata: Arc<dyn PageMetadata>,
    pub fetcher: Arc<dyn SheetFetcher>,
    pub optimizer: Arc<dyn ImageOptimizer>,
    pub shell: Arc<dyn PageShell>,
    pub qr: Arc<dyn QrActivator>,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct Activation {
    pub state: PipelineState,
    /// Items rendered, in row order.
    pub items: usize,
    /// Entries in the POS index the items were resolved against.
    pub pos_entries: usize,
    /// The spawned QR activation. The pipeline does not wait on it.
    pub qr: JoinHandle<Result<(), QrError>>,
}

pub struct MenuPipeline {
    caps: Capabilities,
    config: MenuTableConfig,
}

impl MenuPipeline {
    pub fn new(caps: Capabilities, config: MenuTableConfig) -> Self {
        Self { caps, config }
    }

    /// Renders `block` into the shell for the page at `page_url`.
    ///
    /// Must be called within a Tokio runtime; the QR activation is spawned on it.
    pub async fn run(&self, block: &Block, page_url: &Url) -> Result<Activation, PipelineError> {
        let mut state = PipelineState::Init;
        tracing::debug!("menu pipeline {} for {}", state, page_url);
        self.caps.shell.hide();
        if let Some(background) = self.caps.metadata.get(BACKGROUND) {
            self.caps.shell.set_background(&background);
        }
        self.caps.shell.mount(render::mount_container());

        state.advance(PipelineState::ParsingStatic);
        tracing::debug!("menu pipeline {} and {}", state, PipelineState::FetchingPos);
        let (items, index) = tokio::join!(
            async { block::parse_items(block) },
            self.load_pos(page_url)
        );
        let items = items.map_err(|source| PipelineError::Structure {
            state: PipelineState::ParsingStatic,
            source,
        })?;

        state.advance(PipelineState::Resolving);
        let resolved: Vec<_> = items
            .iter()
            .map(|item| placeholder::resolve_item(item, &index))
            .collect();

        state.advance(PipelineState::Assembling);
        let header = MenuHeader::from_metadata(self.caps.metadata.as_ref());
        let mut mount = render::mount_container();
        render::assemble(
            &mut mount,
            &header,
            &resolved,
            self.caps.optimizer.as_ref(),
            &self.config,
        );
        self.caps.shell.mount(mount);

        state.advance(PipelineState::Activated);
        let qr = self.spawn_qr(page_url);
        tracing::info!(
            "rendered {} menu items against {} POS entries",
            resolved.len(),
            index.len()
        );

        Ok(Activation {
            state,
            items: resolved.len(),
            pos_entries: index.len(),
            qr,
        })
    }

    /// Loads the POS index from the page's `product-data-source` sheet.
    async fn load_pos(&self, page_url: &Url) -> PosIndex {
        let Some(url) = sheet_url(page_url, self.caps.metadata.as_ref()) else {
            tracing::warn!(
                "no usable {} for {}, rendering without POS data",
                PRODUCT_DATA_SOURCE,
                page_url
            );
            return PosIndex::new();
        };
        pos::load_index(self.caps.fetcher.as_ref(), &url).await
    }

    fn spawn_qr(&self, page_url: &Url) -> JoinHandle<Result<(), QrError>> {
        let activator = Arc::clone(&self.caps.qr);
        let mount = QrMount {
            class: QR_MOUNT_CLASS.to_string(),
        };
        let payload = QrPayload {
            text: page_url.to_string(),
            width: self.config.qr.width,
            height: self.config.qr.height,
            correct_level: self.config.qr.correct_level,
        };
        tokio::spawn(async move {
            let result = activator.activate(&mount, &payload).await;
            if let Err(err) = &result {
                tracing::warn!("QR activation failed: {}", err);
            }
            result
        })
    }
}

/// Page origin joined with the `product-data-source` path.
///
/// None when the metadata is missing or empty, or the page has an opaque
/// origin (e.g. `file:`).
pub fn sheet_url(page_url: &Url, meta: &dyn PageMetadata) -> Option<String> {
    let path = meta.get(PRODUCT_DATA_SOURCE).filter(|p| !p.is_empty())?;
    let origin = page_url.origin();
    if !origin.is_tuple() {
        return None;
    }
    Some(format!("{}{}", origin.ascii_serialization(), path))
}

#[cfg(test)]
mod tests;
