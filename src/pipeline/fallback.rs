use crate::{
    error::CoverError,
    hosts::{self, SearchStrategy},
    http::HttpTransport,
    types::CandidateResult,
};

/// Input that ends the keyword loop.
pub const EXIT_SENTINEL: &str = "~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackChoice {
    Keywords,
    Exit,
}

/// Asks the user how to carry on after a search came back empty.
pub trait KeywordPrompt {
    /// Keyword search or give up.
    fn offer_keyword_search(&mut self) -> FallbackChoice;

    /// Next keywords to search for, `None` to stop. `attempt` counts the
    /// keyword searches that already came back empty.
    fn next_keywords(&mut self, attempt: usize) -> Option<String>;
}

/// Lets the user search again with keywords after an empty search.
///
/// Keyword searches repeat until one of them finds candidates or the prompt
/// gives up. Blank input is skipped without a request.
///
/// # Errors
///
/// [`CoverError::NoResults`] when the host has no keyword search, the user
/// declines, or the user stops before anything was found. Network errors of
/// the keyword searches are returned as they are.
pub async fn recover(
    strategy: &dyn SearchStrategy,
    transport: &dyn HttpTransport,
    prompt: &mut dyn KeywordPrompt,
) -> Result<Vec<CandidateResult>, CoverError> {
    if !strategy.supports_keyword_fallback() {
        return Err(CoverError::NoResults);
    }

    if prompt.offer_keyword_search() == FallbackChoice::Exit {
        return Err(CoverError::NoResults);
    }

    let mut attempt = 0;
    loop {
        let Some(keywords) = prompt.next_keywords(attempt) else {
            return Err(CoverError::NoResults);
        };

        let keywords = keywords.trim();
        if keywords == EXIT_SENTINEL {
            return Err(CoverError::NoResults);
        }
        if keywords.is_empty() {
            continue;
        }

        let candidates = hosts::search_keywords(strategy, transport, keywords).await?;
        if !candidates.is_empty() {
            return Ok(candidates);
        }
        attempt += 1;
    }
}
