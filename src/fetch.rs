// src/fetch.rs

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{Result, ScrapeError};

/// Response as received: status and the undecoded body.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Blocking client with reqwest's 30s default timeout switched off.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(None)
        .build()
        .map_err(ScrapeError::Client)
}

/// Single GET, no retry. A non-success status is logged and the body is
/// still returned to the caller.
#[instrument(level = "info", skip(client))]
pub fn fetch_page(client: &Client, url: &str) -> Result<Page> {
    let parsed = Url::parse(url).map_err(|source| ScrapeError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let fetch_err = |source| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    };

    debug!("Fetching {}", parsed);
    let resp = client.get(parsed).send().map_err(fetch_err)?;

    let status = resp.status();
    if !status.is_success() {
        warn!(%url, %status, "non-success status, parsing body anyway");
    }

    let body = resp.bytes().map_err(fetch_err)?.to_vec();
    debug!(%status, bytes = body.len(), "response read");
    Ok(Page { status, body })
}
