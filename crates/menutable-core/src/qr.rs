//! QR code activation.
//!
//! After the menu is mounted, a QR code of the page URL is drawn into the
//! empty `qrcode` node by a lazily loaded script. The pipeline spawns the
//! activation and never waits for it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error-correction level understood by the QR script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CorrectLevel {
    L,
    M,
    Q,
    #[default]
    H,
}

impl fmt::Display for CorrectLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CorrectLevel::L => "L",
            CorrectLevel::M => "M",
            CorrectLevel::Q => "Q",
            CorrectLevel::H => "H",
        };
        f.write_str(s)
    }
}

/// Where the code is drawn: the first element with this class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMount {
    pub class: String,
}

/// What to encode and how large.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPayload {
    pub text: String,
    pub width: u32,
    pub height: u32,
    pub correct_level: CorrectLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    #[error("QR mount .{0} is not in the page")]
    MountMissing(String),
    #[error("QR script {path} could not be loaded: {reason}")]
    ScriptLoad { path: String, reason: String },
}

/// Draws a QR code into a mounted node.
#[async_trait]
pub trait QrActivator: Send + Sync {
    async fn activate(&self, mount: &QrMount, payload: &QrPayload) -> Result<(), QrError>;
}

/// A script the host page should load, with the code to run once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadScript {
    pub src: String,
    pub onload: String,
}

/// Host side of script loading.
pub trait ScriptHost: Send + Sync {
    /// True if an element with `class` is currently mounted.
    fn has_class(&self, class: &str) -> bool;
    fn load_script(&self, script: HeadScript) -> Result<(), QrError>;
}

/// Activates the QR code by appending the QR script to the host page and
/// constructing the code from its load callback.
pub struct ScriptQrActivator<H> {
    host: std::sync::Arc<H>,
    script_path: String,
}

impl<H: ScriptHost> ScriptQrActivator<H> {
    pub fn new(host: std::sync::Arc<H>, script_path: impl Into<String>) -> Self {
        Self {
            host,
            script_path: script_path.into(),
        }
    }
}

#[async_trait]
impl<H: ScriptHost> QrActivator for ScriptQrActivator<H> {
    async fn activate(&self, mount: &QrMount, payload: &QrPayload) -> Result<(), QrError> {
        if !self.host.has_class(&mount.class) {
            return Err(QrError::MountMissing(mount.class.clone()));
        }
        let script = HeadScript {
            src: self.script_path.clone(),
            onload: qr_init_js(mount, payload),
        };
        tracing::debug!("loading QR script {} for {}", script.src, payload.text);
        self.host.load_script(script)
    }
}

/// `new QRCode(...)` call for the script's load callback.
pub fn qr_init_js(mount: &QrMount, payload: &QrPayload) -> String {
    // serde_json gives a valid JS string literal for any text.
    let class = serde_json::Value::from(mount.class.as_str());
    let text = serde_json::Value::from(payload.text.as_str());
    format!(
        "new QRCode(document.getElementsByClassName({})[0], {{ text: {}, width: {}, height: {}, correctLevel: QRCode.CorrectLevel.{} }});",
        class, text, payload.width, payload.height, payload.correct_level
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeHost {
        classes: Vec<&'static str>,
        loaded: Mutex<Vec<HeadScript>>,
    }

    impl ScriptHost for FakeHost {
        fn has_class(&self, class: &str) -> bool {
            self.classes.contains(&class)
        }

        fn load_script(&self, script: HeadScript) -> Result<(), QrError> {
            self.loaded.lock().unwrap().push(script);
            Ok(())
        }
    }

    fn payload() -> QrPayload {
        QrPayload {
            text: "https://example.com/menu?table=\"4\"".to_string(),
            width: 90,
            height: 90,
            correct_level: CorrectLevel::H,
        }
    }

    fn mount() -> QrMount {
        QrMount {
            class: "qrcode".to_string(),
        }
    }

    #[test]
    fn init_js_quotes_text() {
        let js = qr_init_js(&mount(), &payload());
        assert_eq!(
            js,
            r#"new QRCode(document.getElementsByClassName("qrcode")[0], { text: "https://example.com/menu?table=\"4\"", width: 90, height: 90, correctLevel: QRCode.CorrectLevel.H });"#
        );
    }

    #[tokio::test]
    async fn activation_loads_script_once_mounted() {
        let host = Arc::new(FakeHost {
            classes: vec!["qrcode"],
            ..Default::default()
        });
        let activator = ScriptQrActivator::new(host.clone(), "/blocks/menutable/qrcode.min.js");
        activator.activate(&mount(), &payload()).await.unwrap();
        let loaded = host.loaded.lock().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].src, "/blocks/menutable/qrcode.min.js");
    }

    #[tokio::test]
    async fn activation_without_mount_fails() {
        let host = Arc::new(FakeHost::default());
        let activator = ScriptQrActivator::new(host.clone(), "/qr.js");
        assert_eq!(
            activator.activate(&mount(), &payload()).await,
            Err(QrError::MountMissing("qrcode".to_string()))
        );
        assert!(host.loaded.lock().unwrap().is_empty());
    }

    #[test]
    fn correct_level_parses_from_letter() {
        let level: CorrectLevel = serde_json::from_str("\"Q\"").unwrap();
        assert_eq!(level, CorrectLevel::Q);
        assert_eq!(level.to_string(), "Q");
    }
}
