//! One-time load of the word list text.

use anyhow::Context;

/// Fetch the word list from an http(s) URL or read it from disk.
pub async fn load_word_list(source: &str) -> anyhow::Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        tracing::info!(url = source, "fetching word list");
        let response = reqwest::get(source)
            .await
            .with_context(|| format!("failed to fetch word list from {source}"))?
            .error_for_status()
            .with_context(|| format!("word list request to {source} failed"))?;
        return response
            .text()
            .await
            .with_context(|| format!("failed to read word list body from {source}"));
    }

    tracing::info!(path = source, "reading word list");
    tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("failed to read word list {source}"))
}
