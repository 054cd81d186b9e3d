//! Generic render tree nodes.

/// A render tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Plain text, escaped on output.
    Text(String),
    /// Authored markup, emitted as is.
    Markup(String),
    Picture(Picture),
}

/// Container node with an optional id and class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub class: Option<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            class: None,
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Child elements, skipping text and pictures.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Depth-first search (self included) for the first element with `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        if self.class.as_deref() == Some(class) {
            return Some(self);
        }
        self.elements().find_map(|e| e.find_class(class))
    }

    /// Concatenated text and markup of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) | Node::Markup(t) => out.push_str(t),
            Node::Element(e) => collect_text(&e.children, out),
            Node::Picture(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<Picture> for Node {
    fn from(p: Picture) -> Self {
        Node::Picture(p)
    }
}

/// Responsive `<picture>`: alternative sources plus the fallback image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    pub sources: Vec<PictureSource>,
    pub img: Option<Img>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureSource {
    pub media: Option<String>,
    pub mime: Option<String>,
    pub srcset: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Eager,
    Lazy,
}

impl Loading {
    pub fn as_str(self) -> &'static str {
        match self {
            Loading::Eager => "eager",
            Loading::Lazy => "lazy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Img {
    pub src: String,
    pub alt: String,
    pub loading: Loading,
}
