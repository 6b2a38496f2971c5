//! The fetch-decode-render workflow.
//!
//! Three retrievals are issued together and joined with all-or-nothing
//! semantics. Nothing reaches the surface unless every retrieval succeeded.

use crate::fetcher::ContentFetcher;
use crate::render;
use crate::surface::DisplaySurface;
use crate::types::{DecodedPayload, FetchResult, RetrievalRequest};

pub const TEA_LOCATOR: &str = "./images/tea.jpg";
pub const COFFEE_LOCATOR: &str = "./images/coffee.jpg";
pub const DOCUMENT_LOCATOR: &str = "./test.txt";

/// The three requests of one display run, in mount order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPlan {
    pub first_image: RetrievalRequest,
    pub second_image: RetrievalRequest,
    pub document: RetrievalRequest,
}

impl DisplayPlan {
    pub fn new(
        first_image: impl Into<String>,
        second_image: impl Into<String>,
        document: impl Into<String>,
    ) -> Self {
        Self {
            first_image: RetrievalRequest::binary(first_image),
            second_image: RetrievalRequest::binary(second_image),
            document: RetrievalRequest::text(document),
        }
    }

    pub fn requests(&self) -> [&RetrievalRequest; 3] {
        [&self.first_image, &self.second_image, &self.document]
    }
}

impl Default for DisplayPlan {
    fn default() -> Self {
        Self::new(TEA_LOCATOR, COFFEE_LOCATOR, DOCUMENT_LOCATOR)
    }
}

/// Run all three retrievals concurrently and wait for every one of them.
///
/// Requests are issued in plan order and each runs to completion, even when
/// a sibling has already failed. On success the payloads come back in plan
/// order regardless of which response arrived first; otherwise the error of
/// the earliest failing request in plan order is returned.
pub async fn retrieve_all(
    fetcher: &ContentFetcher,
    plan: &DisplayPlan,
) -> FetchResult<[DecodedPayload; 3]> {
    let (first, second, document) = futures::join!(
        fetcher.retrieve(&plan.first_image),
        fetcher.retrieve(&plan.second_image),
        fetcher.retrieve(&plan.document)
    );
    Ok([first?, second?, document?])
}

/// Retrieve everything in the plan, then mount it on `surface`.
///
/// Returns the number of mounted elements. On error the surface is left
/// untouched.
pub async fn display_content<S>(
    fetcher: &ContentFetcher,
    surface: &mut S,
    plan: &DisplayPlan,
) -> FetchResult<usize>
where
    S: DisplaySurface + ?Sized,
{
    let payloads = retrieve_all(fetcher, plan).await?;
    let mounted = render::mount(surface, payloads);
    tracing::info!("mounted {mounted} elements");
    Ok(mounted)
}

/// Like [`display_content`], but a failure is logged instead of returned.
pub async fn display_content_or_log<S>(
    fetcher: &ContentFetcher,
    surface: &mut S,
    plan: &DisplayPlan,
) -> Option<usize>
where
    S: DisplaySurface + ?Sized,
{
    match display_content(fetcher, surface, plan).await {
        Ok(mounted) => Some(mounted),
        Err(e) => {
            tracing::error!("failed to display content: {e}");
            None
        }
    }
}
