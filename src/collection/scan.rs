use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{
    collection::TagReader,
    error::CoverError,
    types::{Identity, VARIOUS_ARTISTS},
    utils,
};

/// Audio files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into. Symlinks count when they point at
/// a regular file. Files are matched on their
/// extension, case-insensitively, against
/// [`AUDIO_EXTENSIONS`](crate::utils::AUDIO_EXTENSIONS).
pub fn list_audio_files(dir: &Path) -> Result<Vec<PathBuf>, CoverError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| CoverError::Io(e.into()))?;
        if entry.path().is_file() && utils::is_audio_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Works out which artist and album the files belong to.
///
/// Every file has to be readable. Files of several artists are searched as
/// [`VARIOUS_ARTISTS`]; files of several albums are refused.
///
/// # Errors
///
/// - [`CoverError::NoAudioFiles`] for an empty file list
/// - [`CoverError::UnreadableTags`] for the first file without artist/album
/// - [`CoverError::AmbiguousAlbum`] when more than one album is found
pub fn infer_identity(
    dir: &Path,
    files: &[PathBuf],
    reader: &dyn TagReader,
) -> Result<Identity, CoverError> {
    let mut artists: Vec<String> = Vec::new();
    let mut albums: Vec<String> = Vec::new();

    for file in files {
        let tags = reader.read_tags(file)?;
        if !artists.contains(&tags.artist) {
            artists.push(tags.artist);
        }
        if !albums.contains(&tags.album) {
            albums.push(tags.album);
        }
    }

    if albums.len() > 1 {
        return Err(CoverError::AmbiguousAlbum(albums));
    }

    let album = albums
        .pop()
        .ok_or_else(|| CoverError::NoAudioFiles(dir.to_path_buf()))?;
    let artist = if artists.len() > 1 {
        VARIOUS_ARTISTS.to_string()
    } else {
        artists.pop().unwrap_or_else(|| VARIOUS_ARTISTS.to_string())
    };

    Ok(Identity { artist, album })
}
