//! Async content fetcher wrapping reqwest.
//!
//! One GET per retrieval: the status is checked before the body is read,
//! then the body is decoded by the request's kind. No retry, no timeout.

use url::Url;

use crate::types::{DecodedPayload, FetchError, FetchResult, PayloadKind, RetrievalRequest};

/// UTF-8 byte order mark, dropped from text bodies.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Retrieves and decodes resources over HTTP(S).
#[derive(Clone)]
pub struct ContentFetcher {
    client: reqwest::Client,
    /// Base URL that relative locators are joined onto.
    base: Option<Url>,
}

impl Default for ContentFetcher {
    fn default() -> Self {
        Self {
            client: build_client(),
            base: None,
        }
    }
}

impl ContentFetcher {
    /// Create a fetcher that only accepts absolute locators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher that resolves relative locators against `base`.
    pub fn with_base(base: Url) -> Self {
        Self {
            client: build_client(),
            base: Some(base),
        }
    }

    /// Use a preconfigured client (proxies, TLS roots, ...).
    pub fn with_client(client: reqwest::Client, base: Option<Url>) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Resolve a locator into the absolute URL that will be requested.
    pub fn resolve(&self, locator: &str) -> FetchResult<Url> {
        let url = match Url::parse(locator) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base {
                Some(base) => base.join(locator)?,
                None => {
                    return Err(FetchError::InvalidLocator(format!(
                        "relative locator {locator:?} needs a base URL"
                    )))
                }
            },
            Err(e) => return Err(FetchError::InvalidLocator(format!("{locator:?}: {e}"))),
        };

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(FetchError::InvalidLocator(format!(
                "unsupported scheme {other:?} in {url}"
            ))),
        }
    }

    /// Perform a single retrieval and decode the body.
    ///
    /// A non-2xx status fails with [`FetchError::Http`] before the body is
    /// touched, so no decode is attempted on error responses.
    pub async fn retrieve(&self, request: &RetrievalRequest) -> FetchResult<DecodedPayload> {
        let url = self.resolve(&request.locator)?;
        tracing::debug!("GET {url} as {}", request.expected_kind);

        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!("GET {url} returned {status}");
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        tracing::debug!("GET {url} read {} bytes", body.len());
        decode_body(body.to_vec(), request.expected_kind)
    }
}

fn build_client() -> reqwest::Client {
    reqwest::Client::builder().build().unwrap_or_default()
}

/// Decode a successful response body into the requested representation.
pub fn decode_body(body: Vec<u8>, kind: PayloadKind) -> FetchResult<DecodedPayload> {
    match kind {
        PayloadKind::Binary => Ok(DecodedPayload::Binary(body)),
        PayloadKind::Text => {
            let body = if body.starts_with(UTF8_BOM) {
                body[UTF8_BOM.len()..].to_vec()
            } else {
                body
            };
            String::from_utf8(body)
                .map(DecodedPayload::Text)
                .map_err(|e| {
                    FetchError::Decode(format!("body is not valid UTF-8: {}", e.utf8_error()))
                })
        }
    }
}
