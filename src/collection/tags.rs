use std::path::Path;

use lofty::{file::TaggedFileExt, probe::Probe, tag::Accessor};

use crate::{error::CoverError, types::TrackTags};

/// Reads the artist and album of one audio file.
pub trait TagReader {
    fn read_tags(&self, path: &Path) -> Result<TrackTags, CoverError>;
}

/// [`TagReader`] backed by lofty, format independent.
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> Result<TrackTags, CoverError> {
        let unreadable = |reason: String| CoverError::UnreadableTags {
            path: path.to_path_buf(),
            reason,
        };

        let tagged_file = Probe::open(path)
            .map_err(|e| unreadable(e.to_string()))?
            .read()
            .map_err(|e| unreadable(e.to_string()))?;

        // Prefer the format's native tag, any tag will do otherwise.
        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .ok_or_else(|| unreadable("no tags".to_string()))?;

        let artist = tag
            .artist()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| unreadable("missing artist".to_string()))?;
        let album = tag
            .album()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| unreadable("missing album".to_string()))?;

        Ok(TrackTags { artist, album })
    }
}
