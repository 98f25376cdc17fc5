use std::path::PathBuf;

use tabled::Tabled;

use crate::utils;

/// Artist name used when the files of one album carry several artists.
pub const VARIOUS_ARTISTS: &str = "Various Artists";

/// The artist and album a run searches cover art for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub artist: String,
    pub album: String,
}

/// Tags read from a single audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: String,
    pub album: String,
}

/// Search-safe artist and album tokens.
///
/// Words are joined with [`utils::QUERY_SEPARATOR`]; either side may be empty
/// when every word of the original value contained a non-alphabetic character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub artist: String,
    pub album: String,
}

impl NormalizedQuery {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            artist: utils::normalize(
                &utils::to_query_words(&identity.artist),
                utils::QUERY_SEPARATOR,
            ),
            album: utils::normalize(
                &utils::to_query_words(&identity.album),
                utils::QUERY_SEPARATOR,
            ),
        }
    }
}

/// How a host hands out its cover art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retrieval {
    /// Every candidate resolves to one jpg image.
    DirectImage,
    /// Every candidate resolves to a zip archive holding a set of images.
    Archive,
}

/// Reference to one release's detail page, exactly as the host printed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateResult(pub String);

impl CandidateResult {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    ArchiveEntry,
}

/// A downloadable asset found on a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub label: String,
    pub url: String,
    pub kind: AssetKind,
}

/// Running 1-based index over the candidates processed in a run.
///
/// Owned by the caller and handed to every resolution step, so labels stay
/// unique for the whole run.
#[derive(Debug, Default)]
pub struct LabelCounter {
    current: usize,
}

impl LabelCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> usize {
        self.current += 1;
        self.current
    }

    pub fn current(&self) -> usize {
        self.current
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub host: String,
    pub retrieval: Retrieval,
    /// Number of images (or image sets) saved.
    pub saved: usize,
    /// Files written to the target directory, in download order.
    pub files: Vec<PathBuf>,
    /// Set when the image batch stopped early on a failed download.
    pub stopped_early: Option<String>,
}

impl RunSummary {
    pub fn message(&self) -> String {
        match self.retrieval {
            Retrieval::DirectImage => format!("{} images found and saved to disk.", self.saved),
            Retrieval::Archive => format!("{} image sets found and saved to disk.", self.saved),
        }
    }
}

#[derive(Tabled)]
pub struct SavedFileTableRow {
    pub file: String,
}

#[derive(Tabled)]
pub struct HostTableRow {
    pub name: String,
    pub url: String,
    pub status: String,
}
