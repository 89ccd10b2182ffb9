//! HTTP page source backed by the live REST endpoint.

use crate::cursor::next_page_link;
use crate::protocol::{ProteinRow, SearchResponse};
use crate::source::{Page, PageSource};
use anyhow::{bail, Context, Result};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the search endpoint.
///
/// Intended to run on a background fetch thread; one instance is shared
/// across all fetches of a session.
pub struct RestClient {
    http: reqwest::blocking::Client,
}

impl RestClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building HTTP client")?;
        Ok(Self { http })
    }
}

impl PageSource for RestClient {
    fn fetch_page(&self, url: &str) -> Result<Page> {
        let response = self
            .http
            .get(url)
            .send()
            .with_context(|| format!("request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("server returned {status} for {url}");
        }

        // The continuation link must come from the same response whose body
        // fills the buffer; both are read here before the response is
        // consumed.
        let next_link = response
            .headers()
            .get("link")
            .and_then(|value| value.to_str().ok())
            .map(next_page_link)
            .unwrap_or_default();

        let body: SearchResponse = response
            .json()
            .with_context(|| format!("malformed search response body from {url}"))?;

        Ok(Page {
            rows: body.results.into_iter().map(ProteinRow::from_entry).collect(),
            next_link,
        })
    }
}
