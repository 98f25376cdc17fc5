//! # Cover Art Hosts
//!
//! Every supported host is a [`SearchStrategy`]. A strategy knows how to
//! build the host's search URLs and how to read the host's markup: which
//! elements on a result page point at release detail pages, and which element
//! on a detail page points at the downloadable asset.
//!
//! Network access is kept out of the strategies. [`search`] and
//! [`search_keywords`] fetch the page through an
//! [`HttpTransport`](crate::http::HttpTransport) and hand the markup to the
//! strategy.
//!
//! ## Supported hosts
//!
//! - [`gallery`] - image gallery host, one jpg per candidate, keyword search
//! - [`archive`] - archive distribution host, one zip per candidate
//!
//! [`selector::select`] probes the hosts in priority order and returns the
//! strategy of the first one that answers.

pub mod archive;
pub mod gallery;
pub mod selector;

pub use archive::ArchiveStrategy;
pub use gallery::GalleryStrategy;

use crate::{
    config,
    error::CoverError,
    http::HttpTransport,
    types::{CandidateResult, NormalizedQuery, ResolvedAsset, Retrieval},
};

pub trait SearchStrategy: Send + Sync {
    /// Short host name used on the command line.
    fn name(&self) -> &str;

    fn base_url(&self) -> &str;

    fn retrieval(&self) -> Retrieval;

    /// Search URL for the artist and album tokens.
    fn build_query_url(&self, query: &NormalizedQuery) -> String;

    fn supports_keyword_fallback(&self) -> bool {
        false
    }

    /// Search URL for free-form keywords, `None` when the host has no
    /// keyword search.
    fn build_keyword_url(&self, _keywords: &str) -> Option<String> {
        None
    }

    /// Candidate references on a result page, in page order.
    fn parse_results(&self, html: &str) -> Vec<CandidateResult>;

    /// Reads the asset location from a candidate's detail page.
    ///
    /// `index` is the 1-based position of the candidate among all candidates
    /// processed in the run.
    fn parse_detail(
        &self,
        candidate: &CandidateResult,
        page_url: &str,
        html: &str,
        index: usize,
    ) -> Result<ResolvedAsset, CoverError>;
}

/// Supported hosts in their default priority order.
pub const HOST_NAMES: [&str; 2] = [gallery::NAME, archive::NAME];

/// Strategy for a host name, using the configured base URL.
pub fn strategy_for(name: &str) -> Option<Box<dyn SearchStrategy>> {
    match name {
        gallery::NAME => Some(Box::new(GalleryStrategy::new(config::gallery_url()))),
        archive::NAME => Some(Box::new(ArchiveStrategy::new(config::archive_url()))),
        _ => None,
    }
}

/// All supported hosts in default priority order.
pub fn default_strategies() -> Vec<Box<dyn SearchStrategy>> {
    HOST_NAMES.iter().filter_map(|name| strategy_for(name)).collect()
}

pub async fn search(
    strategy: &dyn SearchStrategy,
    transport: &dyn HttpTransport,
    url: &str,
) -> Result<Vec<CandidateResult>, CoverError> {
    let html = transport.get_text(url).await?;
    Ok(strategy.parse_results(&html))
}

/// Runs a keyword-only search.
///
/// Fails with [`CoverError::NoResults`] when the strategy has no keyword
/// search, since nothing else can be tried on that host.
pub async fn search_keywords(
    strategy: &dyn SearchStrategy,
    transport: &dyn HttpTransport,
    keywords: &str,
) -> Result<Vec<CandidateResult>, CoverError> {
    let url = strategy
        .build_keyword_url(keywords)
        .ok_or(CoverError::NoResults)?;
    search(strategy, transport, &url).await
}
