//! Configuration loading and resolution.

use anyhow::{Context, Result};
use url::Url;

/// Environment variable consulted when `--base-url` is not given.
pub const BASE_URL_ENV: &str = "CONTENT_FETCH_BASE_URL";

/// Where the static file server is expected when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Resolve the base URL that relative locators are joined onto.
///
/// Order: explicit flag, then `CONTENT_FETCH_BASE_URL`, then the default.
pub fn resolve_base_url(explicit: Option<&str>) -> Result<Url> {
    let from_env = std::env::var(BASE_URL_ENV).ok();
    resolve_base_url_from(explicit, from_env.as_deref())
}

/// Same as [`resolve_base_url`] with the environment value passed in.
pub fn resolve_base_url_from(explicit: Option<&str>, from_env: Option<&str>) -> Result<Url> {
    let raw = explicit
        .or(from_env.filter(|v| !v.trim().is_empty()))
        .unwrap_or(DEFAULT_BASE_URL)
        .trim();

    let mut url = Url::parse(raw).with_context(|| format!("invalid base URL {raw:?}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("base URL must be http or https, got {raw:?}");
    }

    // Without a trailing slash the last path segment would be replaced on join.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
