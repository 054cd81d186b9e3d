//! `menutable render <page.json>` – run the pipeline and write the document.

use anyhow::{Context, Result};
use menutable_core::config::MenuTableConfig;
use menutable_core::fetch::CurlFetcher;
use menutable_core::metadata::{PageMetadata, OG_TITLE};
use menutable_core::page::PageDescription;
use menutable_core::picture::ResponsivePictureOptimizer;
use menutable_core::pipeline::{Capabilities, MenuPipeline};
use menutable_core::qr::ScriptQrActivator;
use menutable_core::shell::HtmlPageShell;
use std::path::Path;
use std::sync::Arc;

pub async fn run_render(cfg: &MenuTableConfig, page_path: &Path, out: Option<&Path>) -> Result<()> {
    let page = PageDescription::load(page_path)?;
    let page_url = page.page_url()?;

    let shell = Arc::new(HtmlPageShell::new(
        page.metadata.get_or_empty(OG_TITLE),
        page.main.clone(),
    ));
    let caps = Capabilities {
        metadata: Arc::new(page.metadata.clone()),
        fetcher: Arc::new(CurlFetcher::new()),
        optimizer: Arc::new(ResponsivePictureOptimizer::new(page_url.clone())),
        shell: shell.clone(),
        qr: Arc::new(ScriptQrActivator::new(
            shell.clone(),
            cfg.qr.script_path.clone(),
        )),
    };

    let activation = MenuPipeline::new(caps, cfg.clone())
        .run(&page.block, &page_url)
        .await?;

    // The document is only complete once the QR script has been attached.
    match activation.qr.await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => tracing::warn!("rendering without QR code: {}", err),
        Err(err) => tracing::warn!("QR activation task failed: {}", err),
    }

    let html = shell.to_html();
    match out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("write document: {}", path.display()))?;
            println!(
                "Rendered {} items ({} POS entries) to {}",
                activation.items,
                activation.pos_entries,
                path.display()
            );
        }
        None => print!("{}", html),
    }
    Ok(())
}
