use super::*;
use crate::block::{Cell, Row};
use crate::fetch::FetchError;
use crate::metadata::{MetadataMap, CONTACT, MENU_TITLE, OG_TITLE};
use crate::picture::ResponsivePictureOptimizer;
use crate::qr::CorrectLevel;
use crate::shell::HtmlPageShell;
use async_trait::async_trait;
use std::sync::Mutex;

const SHEET: &str = r#"{
    ":type": "sheet",
    "data": [ { "Id": "42", "name": "Pasta", "price": "$12" } ]
}"#;

/// Serves one canned response and records requested URLs.
struct CannedFetcher {
    response: Result<&'static str, u32>,
    requested: Mutex<Vec<String>>,
}

impl CannedFetcher {
    fn ok(body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(body),
            requested: Mutex::new(Vec::new()),
        })
    }

    fn status(status: u32) -> Arc<Self> {
        Arc::new(Self {
            response: Err(status),
            requested: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SheetFetcher for CannedFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.response {
            Ok(body) => Ok(body.to_string()),
            Err(status) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
        }
    }
}

#[derive(Default)]
struct RecordingQr {
    calls: Mutex<Vec<(QrMount, QrPayload)>>,
}

#[async_trait]
impl QrActivator for RecordingQr {
    async fn activate(&self, mount: &QrMount, payload: &QrPayload) -> Result<(), QrError> {
        self.calls
            .lock()
            .unwrap()
            .push((mount.clone(), payload.clone()));
        Ok(())
    }
}

struct Harness {
    shell: Arc<HtmlPageShell>,
    fetcher: Arc<CannedFetcher>,
    qr: Arc<RecordingQr>,
    pipeline: MenuPipeline,
    url: Url,
}

fn metadata() -> MetadataMap {
    [
        (OG_TITLE, "Trattoria"),
        (CONTACT, "555-0100,ciao@example.com"),
        (MENU_TITLE, "Dinner"),
        (PRODUCT_DATA_SOURCE, "/menus/pos.json"),
        (BACKGROUND, "/media/bg.jpg"),
    ]
    .into_iter()
    .collect()
}

fn harness(meta: MetadataMap, fetcher: Arc<CannedFetcher>) -> Harness {
    let url = Url::parse("https://example.com/menus/dinner?table=4").unwrap();
    let shell = Arc::new(HtmlPageShell::new("Dinner", "<p>authored</p>"));
    let qr = Arc::new(RecordingQr::default());
    let caps = Capabilities {
        metadata: Arc::new(meta),
        fetcher: fetcher.clone(),
        optimizer: Arc::new(ResponsivePictureOptimizer::new(url.clone())),
        shell: shell.clone(),
        qr: qr.clone(),
    };
    Harness {
        shell,
        fetcher,
        qr,
        pipeline: MenuPipeline::new(caps, MenuTableConfig::default()),
        url,
    }
}

fn row(name: &str, price: &str, desc: &str, img: &str) -> Row {
    Row::new(vec![
        Cell::text(name),
        Cell::text(price),
        Cell::text(desc),
        Cell::image(img),
    ])
}

fn two_rows() -> Block {
    Block {
        rows: vec![
            row("Only {{SKU42.name}} today", "{{SKU42.price}}", "Fresh", "/media/pasta.png"),
            row("{{SKU9.name}}", "{{SKU9.price}}", "Ask us", "/media/mystery.png"),
        ],
    }
}

fn item_texts(shell: &HtmlPageShell) -> Vec<(String, String)> {
    let mounted = shell.mounted().unwrap();
    mounted
        .find_class("menu-items-container")
        .unwrap()
        .elements()
        .map(|item| {
            (
                item.find_class("name").unwrap().text_content(),
                item.find_class("price").unwrap().text_content(),
            )
        })
        .collect()
}

#[tokio::test]
async fn resolves_matching_row_and_keeps_the_other() {
    let h = harness(metadata(), CannedFetcher::ok(SHEET));
    let activation = h.pipeline.run(&two_rows(), &h.url).await.unwrap();

    assert_eq!(activation.state, PipelineState::Activated);
    assert_eq!(activation.items, 2);
    assert_eq!(activation.pos_entries, 1);
    assert_eq!(
        item_texts(&h.shell),
        [
            ("Only Pasta today".to_string(), "$12".to_string()),
            ("{{SKU9.name}}".to_string(), "{{SKU9.price}}".to_string()),
        ]
    );
    assert_eq!(
        *h.fetcher.requested.lock().unwrap(),
        ["https://example.com/menus/pos.json"]
    );
}

#[tokio::test]
async fn fetch_failure_still_renders_unresolved_items() {
    let h = harness(metadata(), CannedFetcher::status(404));
    let activation = h.pipeline.run(&two_rows(), &h.url).await.unwrap();

    assert_eq!(activation.pos_entries, 0);
    assert_eq!(
        item_texts(&h.shell),
        [
            ("Only {{SKU42.name}} today".to_string(), "{{SKU42.price}}".to_string()),
            ("{{SKU9.name}}".to_string(), "{{SKU9.price}}".to_string()),
        ]
    );
    assert!(h.shell.mounted().unwrap().find_class("qrcode").is_some());
}

#[tokio::test]
async fn shell_is_hidden_styled_and_mounted() {
    let h = harness(metadata(), CannedFetcher::ok(SHEET));
    h.pipeline.run(&two_rows(), &h.url).await.unwrap();

    assert!(h.shell.is_hidden());
    assert_eq!(h.shell.background().as_deref(), Some("/media/bg.jpg"));
    let mounted = h.shell.mounted().unwrap();
    assert_eq!(mounted.id.as_deref(), Some(crate::render::MOUNT_ID));
    assert_eq!(mounted.find_class("menu-title").unwrap().text_content(), "Dinner");
    assert_eq!(mounted.find_class("contact").unwrap().elements().count(), 2);
}

#[tokio::test]
async fn qr_is_activated_with_page_url() {
    let h = harness(metadata(), CannedFetcher::ok(SHEET));
    let activation = h.pipeline.run(&two_rows(), &h.url).await.unwrap();
    activation.qr.await.unwrap().unwrap();

    let calls = h.qr.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (mount, payload) = &calls[0];
    assert_eq!(mount.class, "qrcode");
    assert_eq!(payload.text, "https://example.com/menus/dinner?table=4");
    assert_eq!((payload.width, payload.height), (90, 90));
    assert_eq!(payload.correct_level, CorrectLevel::H);
}

#[tokio::test]
async fn missing_data_source_skips_fetch() {
    let mut meta = metadata();
    meta.insert(PRODUCT_DATA_SOURCE, "");
    let h = harness(meta, CannedFetcher::ok(SHEET));
    let activation = h.pipeline.run(&two_rows(), &h.url).await.unwrap();

    assert_eq!(activation.pos_entries, 0);
    assert!(h.fetcher.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_row_stops_after_init() {
    let h = harness(metadata(), CannedFetcher::ok(SHEET));
    let mut block = two_rows();
    block.rows[1].cells.truncate(2);

    let err = h.pipeline.run(&block, &h.url).await.unwrap_err();
    match err {
        PipelineError::Structure { state, source } => {
            assert_eq!(state, PipelineState::ParsingStatic);
            assert_eq!(source.row(), 1);
        }
    }
    assert!(h.shell.is_hidden());
    let mounted = h.shell.mounted().unwrap();
    assert!(mounted.children.is_empty());
    assert!(h.qr.calls.lock().unwrap().is_empty());
}

#[test]
fn sheet_url_joins_origin_and_path() {
    let url = Url::parse("https://example.com:8443/menus/dinner").unwrap();
    assert_eq!(
        sheet_url(&url, &metadata()).as_deref(),
        Some("https://example.com:8443/menus/pos.json")
    );
    let file = Url::parse("file:///tmp/page.html").unwrap();
    assert!(sheet_url(&file, &metadata()).is_none());
    assert!(sheet_url(&url, &MetadataMap::new()).is_none());
}
