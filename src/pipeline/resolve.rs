use crate::{
    error::CoverError,
    hosts::SearchStrategy,
    http::HttpTransport,
    types::{CandidateResult, LabelCounter, ResolvedAsset},
    utils, warning,
};

/// Follows one candidate to its detail page and reads the asset from it.
///
/// Advances `counter` before anything can fail, so every candidate owns its
/// index even when it cannot be resolved.
pub async fn resolve(
    strategy: &dyn SearchStrategy,
    transport: &dyn HttpTransport,
    candidate: &CandidateResult,
    counter: &mut LabelCounter,
) -> Result<ResolvedAsset, CoverError> {
    let index = counter.next();
    let page_url = utils::join_url(strategy.base_url(), candidate.as_str())?;
    let html = transport.get_text(&page_url).await?;
    strategy.parse_detail(candidate, &page_url, &html, index)
}

/// Resolves every candidate in order. Candidates that fail are reported and
/// left out.
pub async fn resolve_all(
    strategy: &dyn SearchStrategy,
    transport: &dyn HttpTransport,
    candidates: &[CandidateResult],
    counter: &mut LabelCounter,
) -> Vec<ResolvedAsset> {
    let pb = utils::spinner("Reading detail pages...");
    let mut assets = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match resolve(strategy, transport, candidate, counter).await {
            Ok(asset) => assets.push(asset),
            Err(e) => pb.suspend(|| warning!("Skipping {}. Err: {}", candidate.as_str(), e)),
        }
    }
    pb.finish_and_clear();
    assets
}
