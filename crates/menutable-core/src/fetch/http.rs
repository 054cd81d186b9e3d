//! Curl-backed GET.

use async_trait::async_trait;

use super::{FetchError, SheetFetcher};

/// Fetcher that performs the GET with libcurl on a blocking worker thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlFetcher;

impl CurlFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SheetFetcher for CurlFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let owned = url.to_string();
        tokio::task::spawn_blocking(move || get_text(&owned))
            .await
            .map_err(|e| FetchError::Aborted {
                url: url.to_string(),
                reason: e.to_string(),
            })?
    }
}

/// Performs a GET and returns the body as text if the status is 2xx.
///
/// Follows redirects. Runs in the current thread; call from `spawn_blocking`
/// if used from async code.
pub fn get_text(url: &str) -> Result<String, FetchError> {
    let transport = |source: curl::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let status = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    tracing::debug!("fetched {} bytes from {}", body.len(), url);
    Ok(decode_body(url, body))
}

/// Decodes the body as UTF-8, replacing invalid sequences with U+FFFD.
fn decode_body(url: &str, body: Vec<u8>) -> String {
    match String::from_utf8(body) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                "response from {} is not valid UTF-8 (at byte {}), decoding lossily",
                url,
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::build_index;

    #[test]
    fn valid_body_is_returned_as_is() {
        let body = "{\":type\":\"sheet\",\"data\":[]}".as_bytes().to_vec();
        assert_eq!(
            decode_body("http://x/pos.json", body),
            "{\":type\":\"sheet\",\"data\":[]}"
        );
    }

    #[test]
    fn latin1_byte_is_replaced_and_sheet_still_indexes() {
        let mut body = b"{\":type\":\"sheet\",\"data\":[{\"Id\":\"1\",\"name\":\"Caf".to_vec();
        body.push(0xE9);
        body.extend_from_slice(b"\"},{\"Id\":\"2\",\"name\":\"Tea\"}]}");

        let text = decode_body("http://x/pos.json", body);
        assert!(text.contains("Caf\u{FFFD}"));

        let index = build_index(&text, "http://x/pos.json");
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("1").and_then(|r| r.get("name")), Some("Caf\u{FFFD}"));
        assert_eq!(index.get("2").and_then(|r| r.get("name")), Some("Tea"));
    }
}
