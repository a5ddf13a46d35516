//! URL ingestion: outbound fetch and coarse HTML text extraction.
//!
//! Extraction is deliberately crude: capture the `<title>`, cut
//! `<script>`/`<style>` blocks, strip the remaining tags, collapse
//! whitespace. Good enough to feed the chunker; anything fancier belongs in
//! the collectors that produce the corpus files.

use barsha_core::config;
use barsha_core::text::normalize;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>(.*?)</title>").expect("valid regex literal"));
static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*?</script>").expect("valid regex literal"));
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style.*?</style>").expect("valid regex literal"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex literal"));

/// Text pulled out of a fetched page.
#[derive(Debug, Clone)]
pub struct Extracted {
    /// Normalized `<title>` content, empty when the page has none.
    pub title: String,
    /// Normalized page text with markup removed.
    pub text: String,
}

/// Builds the shared outbound HTTP client used for every ingestion fetch.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config::USER_AGENT)
        .timeout(Duration::from_secs(config::FETCH_TIMEOUT_SECS))
        .build()
}

/// Fetches `url` and returns the body. Non-success statuses are errors.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> reqwest::Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    response.text().await
}

/// Coarse HTML-to-text extraction.
pub fn extract_text(html: &str) -> Extracted {
    let title = TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| normalize(m.as_str()))
        .unwrap_or_default();

    let no_script = SCRIPT_RE.replace_all(html, " ");
    let no_style = STYLE_RE.replace_all(&no_script, " ");
    let text = normalize(&TAG_RE.replace_all(&no_style, " "));

    Extracted { title, text }
}
