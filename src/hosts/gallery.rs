use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::{
    error::CoverError,
    hosts::SearchStrategy,
    types::{AssetKind, CandidateResult, NormalizedQuery, ResolvedAsset, Retrieval},
    utils,
};

pub const NAME: &str = "gallery";

const COVER_LINK: &str = "div.coverLink a[href]";
const SELECTED_THUMB: &str = "div.selectedCoverThumb a[href]";

static COVER_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(COVER_LINK).expect("cover link selector"));
static SELECTED_THUMB_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(SELECTED_THUMB).expect("selected thumb selector"));

/// Image gallery host.
///
/// Result pages list one `div.coverLink` per image of a release (front, back,
/// inlay, ...), each wrapping a link to the image's detail page:
///
/// ```html
/// <div class="coverLink">
///   <a href="/show/330836/ought_more_than_any_other_day_2014_retail_cd/front">
///     <img src="/images/loading.gif" alt=""/><br/>Front</a>
/// </div>
/// ```
///
/// The detail page links the full size jpg from `div.selectedCoverThumb`.
pub struct GalleryStrategy {
    base_url: String,
}

impl GalleryStrategy {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl SearchStrategy for GalleryStrategy {
    fn name(&self) -> &str {
        NAME
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn retrieval(&self) -> Retrieval {
        Retrieval::DirectImage
    }

    fn build_query_url(&self, query: &NormalizedQuery) -> String {
        format!(
            "{base}/search/all/all/{artist}{sep}{album}/1",
            base = self.base_url,
            artist = query.artist,
            sep = utils::QUERY_SEPARATOR,
            album = query.album
        )
    }

    fn supports_keyword_fallback(&self) -> bool {
        true
    }

    fn build_keyword_url(&self, keywords: &str) -> Option<String> {
        Some(format!(
            "{base}/search/all/all/{keywords}/1",
            base = self.base_url,
            keywords = utils::keyword_query(keywords)
        ))
    }

    fn parse_results(&self, html: &str) -> Vec<CandidateResult> {
        let document = Html::parse_document(html);
        document
            .select(&COVER_LINK_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .map(|href| CandidateResult(href.trim().to_string()))
            .collect()
    }

    fn parse_detail(
        &self,
        candidate: &CandidateResult,
        page_url: &str,
        html: &str,
        index: usize,
    ) -> Result<ResolvedAsset, CoverError> {
        let document = Html::parse_document(html);
        let href = document
            .select(&SELECTED_THUMB_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .next()
            .ok_or_else(|| CoverError::MissingElement {
                url: page_url.to_string(),
                selector: SELECTED_THUMB.to_string(),
            })?;

        Ok(ResolvedAsset {
            label: format!("[{}] {}", index, utils::last_segment(candidate.as_str())),
            url: utils::join_url(&self.base_url, href.trim())?,
            kind: AssetKind::Image,
        })
    }
}
