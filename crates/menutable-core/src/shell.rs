//! Host page capability.
//!
//! The pipeline never touches page state directly; it hides the original
//! content, mounts its container and sets the background through a
//! [`PageShell`].

use std::sync::{Mutex, MutexGuard};

use crate::qr::{HeadScript, QrError, ScriptHost};
use crate::render::{escape_attr, to_html, Element, Node};

pub trait PageShell: Send + Sync {
    /// Hides the page's primary content.
    fn hide(&self);
    /// Inserts the menu container, replacing any container mounted earlier.
    fn mount(&self, tree: Element);
    fn set_background(&self, url: &str);
}

#[derive(Debug, Default)]
struct ShellState {
    main_hidden: bool,
    background: Option<String>,
    mounted: Option<Element>,
    scripts: Vec<HeadScript>,
}

/// Shell that renders a standalone HTML document.
#[derive(Debug, Default)]
pub struct HtmlPageShell {
    title: String,
    main: String,
    state: Mutex<ShellState>,
}

impl HtmlPageShell {
    /// `main` is the page's original primary content, as markup.
    pub fn new(title: impl Into<String>, main: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            main: main.into(),
            state: Mutex::default(),
        }
    }

    fn state(&self) -> MutexGuard<'_, ShellState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_hidden(&self) -> bool {
        self.state().main_hidden
    }

    pub fn background(&self) -> Option<String> {
        self.state().background.clone()
    }

    pub fn mounted(&self) -> Option<Element> {
        self.state().mounted.clone()
    }

    pub fn scripts(&self) -> Vec<HeadScript> {
        self.state().scripts.clone()
    }

    /// The full document: head scripts, styled body, mounted menu, then main.
    pub fn to_html(&self) -> String {
        let state = self.state();
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str(&format!("<title>{}</title>\n", crate::render::escape_text(&self.title)));
        for script in &state.scripts {
            out.push_str(&format!(
                "<script src=\"{}\" onload=\"{}\"></script>\n",
                escape_attr(&script.src),
                escape_attr(&script.onload)
            ));
        }
        out.push_str("</head>\n");
        match &state.background {
            Some(url) => out.push_str(&format!(
                "<body style=\"{}\">\n",
                escape_attr(&background_style(url))
            )),
            None => out.push_str("<body>\n"),
        }
        if let Some(tree) = &state.mounted {
            out.push_str(&to_html(&Node::Element(tree.clone())));
            out.push('\n');
        }
        if state.main_hidden {
            out.push_str("<main style=\"display: none\">");
        } else {
            out.push_str("<main>");
        }
        out.push_str(&self.main);
        out.push_str("</main>\n</body>\n</html>\n");
        out
    }
}

/// Inline body style for the page background.
pub fn background_style(url: &str) -> String {
    format!(
        "background-image: url('{}'); background-repeat: no-repeat; background-position: center top",
        url
    )
}

impl PageShell for HtmlPageShell {
    fn hide(&self) {
        self.state().main_hidden = true;
    }

    fn mount(&self, tree: Element) {
        self.state().mounted = Some(tree);
    }

    fn set_background(&self, url: &str) {
        self.state().background = Some(url.to_string());
    }
}

impl ScriptHost for HtmlPageShell {
    fn has_class(&self, class: &str) -> bool {
        self.state()
            .mounted
            .as_ref()
            .is_some_and(|tree| tree.find_class(class).is_some())
    }

    fn load_script(&self, script: HeadScript) -> Result<(), QrError> {
        if script.src.is_empty() {
            return Err(QrError::ScriptLoad {
                path: script.src,
                reason: "empty script path".to_string(),
            });
        }
        self.state().scripts.push(script);
        Ok(())
    }
}
