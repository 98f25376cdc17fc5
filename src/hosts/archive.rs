use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::{
    error::CoverError,
    hosts::SearchStrategy,
    types::{AssetKind, CandidateResult, NormalizedQuery, ResolvedAsset, Retrieval},
    utils,
};

pub const NAME: &str = "archive";

const SEARCH_ITEM: &str = "div.thumbnail.text-muted.searchitem.js_href[data-href]";
const ENTRY_FORM: &str = "form#EntryForm[action]";

static SEARCH_ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(SEARCH_ITEM).expect("search item selector"));
static ENTRY_FORM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(ENTRY_FORM).expect("entry form selector"));

/// Archive distribution host.
///
/// Result pages hold one thumbnail block per release, the detail page path
/// sits in `data-href`:
///
/// ```html
/// <div class="thumbnail text-muted searchitem js_href"
///      data-href="/entry/id202809/justin-timberlake-futuresex-lovesounds">
/// ```
///
/// The detail page posts a form whose action is the zip with every image of
/// the release:
///
/// ```html
/// <form id="EntryForm" action="/Download/zip/Justin_Timberlake-Futuresex-Lovesounds.zip" method="post">
/// ```
pub struct ArchiveStrategy {
    base_url: String,
}

impl ArchiveStrategy {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl SearchStrategy for ArchiveStrategy {
    fn name(&self) -> &str {
        NAME
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn retrieval(&self) -> Retrieval {
        Retrieval::Archive
    }

    // The host only finds anything for "artist album"; "album artist" comes
    // back empty.
    fn build_query_url(&self, query: &NormalizedQuery) -> String {
        format!(
            "{base}/search/?q={artist}{sep}{album}&Sektion=2",
            base = self.base_url,
            artist = query.artist,
            sep = utils::QUERY_SEPARATOR,
            album = query.album
        )
    }

    fn parse_results(&self, html: &str) -> Vec<CandidateResult> {
        let document = Html::parse_document(html);
        document
            .select(&SEARCH_ITEM_SELECTOR)
            .filter_map(|div| div.value().attr("data-href"))
            .map(|href| CandidateResult(href.trim().to_string()))
            .collect()
    }

    fn parse_detail(
        &self,
        _candidate: &CandidateResult,
        page_url: &str,
        html: &str,
        index: usize,
    ) -> Result<ResolvedAsset, CoverError> {
        let document = Html::parse_document(html);
        let action = document
            .select(&ENTRY_FORM_SELECTOR)
            .filter_map(|form| form.value().attr("action"))
            .next()
            .ok_or_else(|| CoverError::MissingElement {
                url: page_url.to_string(),
                selector: ENTRY_FORM.to_string(),
            })?;

        Ok(ResolvedAsset {
            label: format!("image_zip{}", index),
            url: utils::join_url(&self.base_url, action.trim())?,
            kind: AssetKind::ArchiveEntry,
        })
    }
}
