//! `content-fetch fetch <locator>` — retrieve and decode a single resource.

use std::path::Path;

use anyhow::{Context, Result};
use content_fetch::{ContentFetcher, PayloadKind, RetrievalRequest};
use url::Url;

use super::output::write_output;

/// Run the fetch command. Returns the number of bytes written.
pub async fn run(base: Url, locator: &str, kind: PayloadKind, out: Option<&Path>) -> Result<usize> {
    let fetcher = ContentFetcher::with_base(base);
    let payload = fetcher
        .retrieve(&RetrievalRequest::new(locator, kind))
        .await
        .with_context(|| format!("failed to fetch {locator}"))?;

    let bytes = payload.into_bytes();
    write_output(out, &bytes)?;
    Ok(bytes.len())
}
