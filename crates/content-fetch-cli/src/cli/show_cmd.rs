//! `content-fetch show` — fetch two images and a document, render them as a page.

use std::path::Path;

use anyhow::Result;
use content_fetch::{display_content_or_log, ContentFetcher, DisplayPlan, HtmlPage};
use url::Url;

use super::output::write_output;

/// Title of the generated page when none is given.
pub const DEFAULT_TITLE: &str = "Fetched content";

/// Run the show command.
///
/// Returns `false` when a retrieval failed. The failure has already been
/// logged and nothing was written.
pub async fn run(base: Url, plan: &DisplayPlan, title: &str, out: Option<&Path>) -> Result<bool> {
    tracing::info!("fetching content from {base}");
    let fetcher = ContentFetcher::with_base(base);
    let mut page = HtmlPage::new(title);

    if display_content_or_log(&fetcher, &mut page, plan).await.is_none() {
        return Ok(false);
    }

    write_output(out, page.render().as_bytes())?;
    Ok(true)
}
