//! Render tree and menu assembly.

mod assemble;
mod html;
mod node;

pub use assemble::{
    assemble, header_section, item_list, item_node, menu_title_line, mount_container, qr_section,
    split_contacts, MenuHeader, MOUNT_ID, QR_MOUNT_CLASS,
};
pub use html::{escape_attr, escape_text, to_html, write_node};
pub use node::{Element, Img, Loading, Node, Picture, PictureSource};
