//! `menutable index <url>` – fetch a sheet and list the POS index.

use anyhow::Result;
use menutable_core::fetch::CurlFetcher;
use menutable_core::pos;

pub async fn run_index(url: &str) -> Result<()> {
    let index = pos::load_index(&CurlFetcher::new(), url).await;
    if index.is_empty() {
        println!("No POS records indexed from {}.", url);
        return Ok(());
    }
    println!("{:<12} {}", "ID", "FIELDS");
    for (id, record) in index.sorted() {
        let fields: Vec<String> = record
            .fields()
            .filter(|(name, _)| *name != pos::ID_FIELD)
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        println!("{:<12} {}", id, fields.join(", "));
    }
    Ok(())
}
