//! In-memory POS lookup keyed by SKU id.

use std::collections::HashMap;

use super::Record;

/// SKU id → record. Built fresh per render; later duplicates win.
#[derive(Debug, Clone, Default)]
pub struct PosIndex {
    items: HashMap<String, Record>,
}

impl PosIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes records in order. Records without an `Id` are skipped.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Inserts `record` under its id, replacing any earlier entry.
    /// Returns false if the record has no id.
    pub fn insert(&mut self, record: Record) -> bool {
        let Some(id) = record.id().map(str::to_string) else {
            tracing::debug!("skipping POS record without id: {:?}", record);
            return false;
        };
        self.items.insert(id, record);
        true
    }

    pub fn get(&self, sku_id: &str) -> Option<&Record> {
        self.items.get(sku_id)
    }

    pub fn contains(&self, sku_id: &str) -> bool {
        self.items.contains_key(sku_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries sorted by id, for stable listings.
    pub fn sorted(&self) -> Vec<(&str, &Record)> {
        let mut entries: Vec<(&str, &Record)> =
            self.items.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
