//! # Search-and-Retrieve Pipeline
//!
//! One run takes the audio files of a directory to cover art saved in the
//! same directory:
//!
//! ```text
//! audio files ─→ Identity ─→ NormalizedQuery
//!                                  ↓
//!              Host Selector (first reachable host)
//!                                  ↓
//!              SearchStrategy::build_query_url + search
//!                                  ↓ (empty)
//!              fallback::recover (keyword loop, gallery host only)
//!                                  ↓
//!              resolve::resolve_all (one detail page per candidate)
//!                                  ↓
//!              persist::save_images | persist::save_archives
//! ```
//!
//! Everything runs one step at a time. The pipeline never exits the process;
//! fatal conditions come back as [`CoverError`] and the command layer decides
//! what to print.
//!
//! Failure granularity differs between hosts: a failed image download stops
//! the remaining images but keeps the run successful, a failed archive
//! download fails the run.

pub mod fallback;
pub mod persist;
pub mod resolve;

use std::path::Path;

use crate::{
    collection::{self, TagReader},
    error::CoverError,
    hosts::{self, SearchStrategy, selector},
    http::HttpTransport,
    info,
    types::{Identity, LabelCounter, NormalizedQuery, Retrieval, RunSummary},
    utils, warning,
};

pub use fallback::{FallbackChoice, KeywordPrompt};

/// Runs the whole pipeline for the audio files in `dir`.
///
/// The directory is scanned and its tags are read before any request goes
/// out, so inconsistent input never reaches the network.
pub async fn run(
    dir: &Path,
    strategies: Vec<Box<dyn SearchStrategy>>,
    transport: &dyn HttpTransport,
    tags: &dyn TagReader,
    prompt: &mut dyn KeywordPrompt,
) -> Result<RunSummary, CoverError> {
    let files = collection::list_audio_files(dir)?;
    let identity = collection::infer_identity(dir, &files, tags)?;
    info!(
        "Found {} audio files of '{}' by '{}'.",
        files.len(),
        identity.album,
        identity.artist
    );

    retrieve(&identity, dir, strategies, transport, prompt).await
}

/// Searches and downloads cover art for `identity` into `dir`.
pub async fn retrieve(
    identity: &Identity,
    dir: &Path,
    strategies: Vec<Box<dyn SearchStrategy>>,
    transport: &dyn HttpTransport,
    prompt: &mut dyn KeywordPrompt,
) -> Result<RunSummary, CoverError> {
    let query = NormalizedQuery::from_identity(identity);

    let strategy = selector::select(strategies, transport).await?;
    info!("Using {} to run search.", strategy.base_url());

    let url = strategy.build_query_url(&query);
    let pb = utils::spinner(format!("Searching {}...", strategy.name()));
    let found = hosts::search(strategy.as_ref(), transport, &url).await;
    pb.finish_and_clear();

    let mut candidates = found?;
    if candidates.is_empty() {
        warning!("No results found for album/artist search.");
        candidates = fallback::recover(strategy.as_ref(), transport, prompt).await?;
    }
    info!("{} results found.", candidates.len());

    let mut counter = LabelCounter::new();
    let assets =
        resolve::resolve_all(strategy.as_ref(), transport, &candidates, &mut counter).await;

    let retrieval = strategy.retrieval();
    let (files, stopped_early, saved) = match retrieval {
        Retrieval::DirectImage => {
            let batch = persist::save_images(transport, &assets, dir).await;
            let saved = batch.saved.len();
            (batch.saved, batch.stopped_by.map(|e| e.to_string()), saved)
        }
        Retrieval::Archive => {
            let extracted = persist::save_archives(transport, &assets, dir).await?;
            (extracted, None, assets.len())
        }
    };

    Ok(RunSummary {
        host: strategy.base_url().to_string(),
        retrieval,
        saved,
        files,
        stopped_early,
    })
}
