//! `menutable resolve <text> --sheet <url>` – resolve one placeholder text.

use anyhow::Result;
use menutable_core::fetch::CurlFetcher;
use menutable_core::placeholder;
use menutable_core::pos;

pub async fn run_resolve(text: &str, sheet: &str) -> Result<()> {
    let index = pos::load_index(&CurlFetcher::new(), sheet).await;
    println!("{}", placeholder::resolve(text, &index));
    Ok(())
}
