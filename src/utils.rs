use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;

use crate::error::CoverError;

pub const QUERY_SEPARATOR: &str = "+";

/// Extensions (lowercase, without the dot) of the files read for tags.
pub const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "ogg", "flac", "wav"];

/// Drops every word that is not made entirely of alphabetic characters.
///
/// `raw` is split on `separator`, the surviving words are joined back with
/// the same separator. Empty words never survive, so an input whose words all
/// contain digits or punctuation yields an empty string.
///
/// ```
/// assert_eq!(normalize("Foo+Bar#+Baz", "+"), "Foo+Baz");
/// ```
pub fn normalize(raw: &str, separator: &str) -> String {
    raw.split(separator)
        .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Turns a tag value into query words joined by [`QUERY_SEPARATOR`].
pub fn to_query_words(value: &str) -> String {
    value.replace(' ', QUERY_SEPARATOR)
}

/// Turns free-form keywords into a query fragment.
///
/// Each whitespace separated word is percent-encoded and the words are joined
/// with [`QUERY_SEPARATOR`].
pub fn keyword_query(keywords: &str) -> String {
    keywords
        .split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join(QUERY_SEPARATOR)
}

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Last non-empty path segment of a reference such as
/// `/show/330836/some_album/front`.
pub fn last_segment(reference: &str) -> &str {
    let path = reference.split(['?', '#']).next().unwrap_or(reference);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
}

/// Resolves `reference` against `base`. Absolute references are kept as is.
///
/// Root-relative references are appended to `base`, so a base with a path
/// (`http://host/mirror`) keeps it.
pub fn join_url(base: &str, reference: &str) -> Result<String, CoverError> {
    let parsed =
        Url::parse(base).map_err(|e| CoverError::InvalidUrl(format!("{}: {}", base, e)))?;

    if reference.starts_with('/') && !reference.starts_with("//") {
        let joined = format!("{}{}", base.trim_end_matches('/'), reference);
        return Url::parse(&joined)
            .map(|url| url.to_string())
            .map_err(|e| CoverError::InvalidUrl(format!("{}: {}", joined, e)));
    }

    parsed
        .join(reference)
        .map(|url| url.to_string())
        .map_err(|e| CoverError::InvalidUrl(format!("{}: {}", reference, e)))
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
