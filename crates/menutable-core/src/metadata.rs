//! Page metadata accessor.

use serde::Deserialize;
use std::collections::HashMap;

/// Relative path of the POS sheet.
pub const PRODUCT_DATA_SOURCE: &str = "product-data-source";
pub const OG_TITLE: &str = "og:title";
/// Comma-separated contact entries.
pub const CONTACT: &str = "contact";
pub const MENU_TITLE: &str = "menu-title";
/// Page background image URL.
pub const BACKGROUND: &str = "background";

/// Key → string lookup over the host page's metadata.
pub trait PageMetadata: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Value for `key`, or the empty string when absent.
    fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }
}

/// Metadata held in memory, e.g. loaded from a page description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MetadataMap(HashMap<String, String>);

impl MetadataMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

impl PageMetadata for MetadataMap {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MetadataMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MetadataMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
