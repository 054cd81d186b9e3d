//! `{{SKU<id>.<field>}}` placeholder resolution against the POS index.
//!
//! Only one SKU id is extracted per text value: the one following the first
//! `{{SKU`. Tokens naming another id in the same text are left untouched.

use crate::block::MenuItem;
use crate::pos::PosIndex;

const TOKEN_OPEN: &str = "{{";
const TOKEN_CLOSE: &str = "}}";
const SKU_OPEN: &str = "{{SKU";

/// Placeholder found in a text value, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderToken<'a> {
    pub sku_id: &'a str,
}

impl<'a> PlaceholderToken<'a> {
    /// Finds the id-bearing token in `text`.
    ///
    /// The text must contain `{{SKU` and `}}`, with the first `{{` before the
    /// first `}}`. The id runs from after `{{SKU` up to the next `.`; without
    /// a `.` there is no id.
    pub fn find(text: &'a str) -> Option<Self> {
        let sku_open = text.find(SKU_OPEN)?;
        let close = text.find(TOKEN_CLOSE)?;
        let open = text.find(TOKEN_OPEN)?;
        if open >= close {
            return None;
        }
        let id_start = sku_open + SKU_OPEN.len();
        let id_len = text[id_start..].find('.')?;
        Some(Self {
            sku_id: &text[id_start..id_start + id_len],
        })
    }

    /// Literal token text for `field` of this token's SKU.
    pub fn field_token(&self, field: &str) -> String {
        field_token(self.sku_id, field)
    }
}

/// `{{SKU<sku_id>.<field>}}`
pub fn field_token(sku_id: &str, field: &str) -> String {
    format!("{}{}.{}{}", SKU_OPEN, sku_id, field, TOKEN_CLOSE)
}

/// Resolves the placeholders of one text value.
///
/// Returns the text unchanged when it has no token or its SKU id is not
/// indexed. Otherwise, for every field of the matched record whose literal
/// token occurs in the text, the first occurrence is replaced by the value.
pub fn resolve(text: &str, index: &PosIndex) -> String {
    let Some(token) = PlaceholderToken::find(text) else {
        return text.to_string();
    };
    let Some(record) = index.get(token.sku_id) else {
        tracing::debug!("SKU {} not in POS index, leaving text as is", token.sku_id);
        return text.to_string();
    };

    let mut resolved = text.to_string();
    for (field, value) in record.fields() {
        let literal = token.field_token(field);
        if text.contains(&literal) {
            resolved = resolved.replacen(&literal, value, 1);
        }
    }
    resolved
}

/// Resolves name, price and description; the image reference is left as is.
pub fn resolve_item(item: &MenuItem, index: &PosIndex) -> MenuItem {
    MenuItem {
        name: resolve(&item.name, index),
        price: resolve(&item.price, index),
        description: resolve(&item.description, index),
        image: item.image.clone(),
    }
}
