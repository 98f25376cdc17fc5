use std::{fmt, io, path::PathBuf};

use reqwest::StatusCode;

/// Everything that can go wrong while looking for and retrieving cover art.
///
/// The first group of variants are the outcomes the pipeline reports to the
/// user. The remaining variants wrap the underlying I/O, HTTP and archive
/// failures.
#[derive(Debug)]
pub enum CoverError {
    /// The directory holds no files with a supported audio extension.
    NoAudioFiles(PathBuf),
    /// The audio files belong to more than one album.
    AmbiguousAlbum(Vec<String>),
    /// A file's artist/album tags could not be read.
    UnreadableTags { path: PathBuf, reason: String },
    /// None of the candidate hosts answered its probe.
    NoHostAvailable,
    /// The search produced no candidates and no fallback found any.
    NoResults,
    /// A detail page did not contain the element that points at the asset.
    MissingElement { url: String, selector: String },
    /// An asset download answered with a non-success status.
    AssetNotFound { url: String, status: StatusCode },
    /// The downloaded archive could not be removed after extraction.
    ExtractionPermissionDenied(PathBuf),
    /// A base URL or page reference that does not form a valid URL.
    InvalidUrl(String),
    /// The request failed before or while the body arrived.
    Http(reqwest::Error),
    /// Reading the directory or writing downloads failed.
    Io(io::Error),
    /// A downloaded archive could not be opened or extracted.
    Archive(zip::result::ZipError),
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::NoAudioFiles(dir) => {
                write!(f, "No audio files found in {}.", dir.display())
            }
            CoverError::AmbiguousAlbum(albums) => write!(
                f,
                "More than one album found in directory: {}.",
                albums.join(", ")
            ),
            CoverError::UnreadableTags { path, reason } => write!(
                f,
                "No available tag information in {}: {}",
                path.display(),
                reason
            ),
            CoverError::NoHostAvailable => write!(f, "All search hosts are down."),
            CoverError::NoResults => write!(f, "No results found for album/artist."),
            CoverError::MissingElement { url, selector } => {
                write!(f, "No '{}' element found at {}.", selector, url)
            }
            CoverError::AssetNotFound { url, status } => {
                write!(f, "Asset not found at {} ({}).", url, status)
            }
            CoverError::ExtractionPermissionDenied(path) => write!(
                f,
                "Zip file {} couldn't be removed automatically.",
                path.display()
            ),
            CoverError::InvalidUrl(msg) => write!(f, "Invalid url: {}", msg),
            CoverError::Http(e) => write!(f, "HTTP error: {}", e),
            CoverError::Io(e) => write!(f, "I/O error: {}", e),
            CoverError::Archive(e) => write!(f, "Archive error: {}", e),
        }
    }
}

impl std::error::Error for CoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoverError::Http(e) => Some(e),
            CoverError::Io(e) => Some(e),
            CoverError::Archive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CoverError {
    fn from(err: reqwest::Error) -> Self {
        CoverError::Http(err)
    }
}

impl From<io::Error> for CoverError {
    fn from(err: io::Error) -> Self {
        CoverError::Io(err)
    }
}

impl From<zip::result::ZipError> for CoverError {
    fn from(err: zip::result::ZipError) -> Self {
        CoverError::Archive(err)
    }
}
