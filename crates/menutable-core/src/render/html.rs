//! HTML serialization of the render tree.

use super::{Element, Node, Picture};

pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

pub fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(e) => write_element(out, e),
        Node::Text(t) => out.push_str(&escape_text(t)),
        Node::Markup(m) => out.push_str(m),
        Node::Picture(p) => write_picture(out, p),
    }
}

fn write_element(out: &mut String, e: &Element) {
    out.push('<');
    out.push_str(e.tag);
    if let Some(id) = &e.id {
        write_attr(out, "id", id);
    }
    if let Some(class) = &e.class {
        write_attr(out, "class", class);
    }
    out.push('>');
    for child in &e.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(e.tag);
    out.push('>');
}

fn write_picture(out: &mut String, p: &Picture) {
    out.push_str("<picture>");
    for source in &p.sources {
        out.push_str("<source");
        if let Some(media) = &source.media {
            write_attr(out, "media", media);
        }
        if let Some(mime) = &source.mime {
            write_attr(out, "type", mime);
        }
        write_attr(out, "srcset", &source.srcset);
        out.push('>');
    }
    if let Some(img) = &p.img {
        out.push_str("<img");
        write_attr(out, "loading", img.loading.as_str());
        write_attr(out, "alt", &img.alt);
        write_attr(out, "src", &img.src);
        out.push('>');
    }
    out.push_str("</picture>");
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
