//! Page description: the host page a menu is rendered into.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use url::Url;

use crate::block::Block;
use crate::metadata::MetadataMap;

/// Page URL, metadata, authored menu block and the original main content.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDescription {
    pub url: String,
    #[serde(default)]
    pub metadata: MetadataMap,
    #[serde(default)]
    pub block: Block,
    #[serde(default)]
    pub main: String,
}

impl PageDescription {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read page description: {}", path.display()))?;
        let page: PageDescription = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse page description JSON: {}", path.display()))?;
        Ok(page)
    }

    pub fn page_url(&self) -> Result<Url> {
        Url::parse(&self.url).with_context(|| format!("invalid page URL: {}", self.url))
    }
}
