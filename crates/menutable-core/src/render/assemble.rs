//! Builds the menu container: header, title line, item list and QR section.
//!
//! Assembly only appends, in order, and never fails; upstream failures have
//! already been degraded to defaults by the time it runs.

use crate::block::MenuItem;
use crate::config::MenuTableConfig;
use crate::metadata::{PageMetadata, CONTACT, MENU_TITLE, OG_TITLE};
use crate::picture::{Breakpoint, ImageOptimizer};

use super::{Element, Node};

/// Id of the container mounted into the host page.
pub const MOUNT_ID: &str = "menutable-container";
/// Class of the empty node the QR code is drawn into.
pub const QR_MOUNT_CLASS: &str = "qrcode";

/// Header values read from page metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuHeader {
    pub title: String,
    pub contacts: Vec<String>,
    pub menu_title: String,
}

impl MenuHeader {
    pub fn from_metadata(meta: &dyn PageMetadata) -> Self {
        Self {
            title: meta.get_or_empty(OG_TITLE),
            contacts: split_contacts(&meta.get_or_empty(CONTACT)),
            menu_title: meta.get_or_empty(MENU_TITLE),
        }
    }
}

/// Splits the contact metadata on commas. Empty entries are kept.
pub fn split_contacts(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

/// The empty container inserted into the host page before assembly.
pub fn mount_container() -> Element {
    Element::div().with_id(MOUNT_ID)
}

pub fn header_section(header: &MenuHeader) -> Element {
    let title = Element::div()
        .with_class("title")
        .child(Element::new("h2").child(Node::Markup(header.title.clone())));

    let mut contacts = Element::div().with_class("contact");
    for entry in &header.contacts {
        contacts.push(Element::div().child(Node::Markup(entry.clone())));
    }

    Element::div()
        .with_class("title-contact")
        .child(title)
        .child(contacts)
}

pub fn menu_title_line(menu_title: &str) -> Element {
    Element::div()
        .with_class("menu-title")
        .child(Node::Text(menu_title.to_string()))
}

/// One item: (name + description), (price), (picture).
pub fn item_node(item: &MenuItem, optimizer: &dyn ImageOptimizer, image_width: u32) -> Element {
    let name_desc = Element::div()
        .with_class("name-desc")
        .child(text_div("name", &item.name))
        .child(text_div("description", &item.description));

    let price = Element::div()
        .with_class("price-container")
        .child(text_div("price", &item.price));

    let image = Element::div().with_class("image").child(optimizer.optimize(
        &item.image,
        "",
        false,
        &[Breakpoint::width(image_width)],
    ));

    Element::div()
        .with_class("item")
        .child(name_desc)
        .child(price)
        .child(image)
}

pub fn item_list(items: &[MenuItem], optimizer: &dyn ImageOptimizer, image_width: u32) -> Element {
    let mut list = Element::div().with_class("menu-items-container");
    for item in items {
        list.push(item_node(item, optimizer, image_width));
    }
    list
}

/// Titled container holding the empty QR mount node.
pub fn qr_section(title: &str) -> Element {
    Element::div()
        .with_class("qrcode-container")
        .child(text_div("qrcode-title", title))
        .child(Element::div().with_class(QR_MOUNT_CLASS))
}

/// Appends the full menu to `mount` in render order.
pub fn assemble(
    mount: &mut Element,
    header: &MenuHeader,
    items: &[MenuItem],
    optimizer: &dyn ImageOptimizer,
    config: &MenuTableConfig,
) {
    mount.push(header_section(header));
    mount.push(menu_title_line(&header.menu_title));
    mount.push(item_list(items, optimizer, config.image_width));
    mount.push(qr_section(&config.qr.title));
}

fn text_div(class: &str, text: &str) -> Element {
    Element::div()
        .with_class(class)
        .child(Node::Text(text.to_string()))
}
