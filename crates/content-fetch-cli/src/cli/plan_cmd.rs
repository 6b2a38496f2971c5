//! `content-fetch plan` — print the requests a `show` run would issue.

use anyhow::{Context, Result};
use content_fetch::{ContentFetcher, DisplayPlan, PayloadKind};
use serde::Serialize;
use url::Url;

/// A plan entry with its locator resolved against the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRequest {
    pub locator: String,
    pub url: String,
    pub expected_kind: PayloadKind,
}

/// Resolve every request in the plan, in issue order.
pub fn resolve_plan(base: Url, plan: &DisplayPlan) -> Result<Vec<ResolvedRequest>> {
    let fetcher = ContentFetcher::with_base(base);
    plan.requests()
        .into_iter()
        .map(|request| {
            let url = fetcher
                .resolve(&request.locator)
                .with_context(|| format!("cannot resolve {:?}", request.locator))?;
            Ok(ResolvedRequest {
                locator: request.locator.clone(),
                url: url.to_string(),
                expected_kind: request.expected_kind,
            })
        })
        .collect()
}

/// Run the plan command.
pub fn run(base: Url, plan: &DisplayPlan) -> Result<()> {
    let resolved = resolve_plan(base.clone(), plan)?;
    let info = serde_json::json!({
        "base_url": base.as_str(),
        "requests": resolved,
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
