use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{error::CoverError, http::HttpTransport, types::ResolvedAsset, utils, warning};

/// Readme some archives ship next to the images.
pub const README_FILE: &str = "readme.txt";

/// Streams `url` to `dest`. Nothing is written on a non-success status.
pub async fn fetch(
    transport: &dyn HttpTransport,
    url: &str,
    dest: &Path,
) -> Result<u64, CoverError> {
    transport.download(url, dest).await
}

/// Result of downloading a batch of images.
#[derive(Debug, Default)]
pub struct ImageBatch {
    pub saved: Vec<PathBuf>,
    /// The failure that stopped the batch, if any.
    pub stopped_by: Option<CoverError>,
}

/// Saves every image asset as `<label>.jpg` in `dir`.
///
/// The first failed download stops the batch; images saved before it are
/// kept.
pub async fn save_images(
    transport: &dyn HttpTransport,
    assets: &[ResolvedAsset],
    dir: &Path,
) -> ImageBatch {
    let mut batch = ImageBatch::default();
    for asset in assets {
        let dest = dir.join(format!("{}.jpg", asset.label));
        match fetch(transport, &asset.url, &dest).await {
            Ok(_) => batch.saved.push(dest),
            Err(e) => {
                warning!("Image not found at {}. Err: {}", asset.url, e);
                batch.stopped_by = Some(e);
                break;
            }
        }
    }
    batch
}

/// Downloads every archive asset to `<label>.zip` in `dir` and unpacks it
/// there.
///
/// Returns the unpacked files of all archives.
///
/// # Errors
///
/// Any failed download aborts the whole batch, as do broken archives.
pub async fn save_archives(
    transport: &dyn HttpTransport,
    assets: &[ResolvedAsset],
    dir: &Path,
) -> Result<Vec<PathBuf>, CoverError> {
    let mut extracted = Vec::new();
    for asset in assets {
        let archive = dir.join(format!("{}.zip", asset.label));
        let pb = utils::spinner(format!("Downloading {}...", asset.label));
        let fetched = fetch(transport, &asset.url, &archive).await;
        pb.finish_and_clear();
        fetched?;
        extracted.extend(unpack_archive(&archive, dir).await?);
    }
    Ok(extracted)
}

/// Extracts `archive` into `dir`, then removes the archive and any bundled
/// readme.
///
/// An archive that cannot be removed for lack of permission stays on disk
/// with a warning. Returns the extracted files, the readme excluded.
pub async fn unpack_archive(archive: &Path, dir: &Path) -> Result<Vec<PathBuf>, CoverError> {
    let archive_path = archive.to_path_buf();
    let target = dir.to_path_buf();
    let mut files = tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>, CoverError> {
        let file = std::fs::File::open(&archive_path)?;
        let mut zip = zip::ZipArchive::new(file)?;
        let names: Vec<PathBuf> = zip
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(|name| target.join(name))
            .collect();
        zip.extract(&target)?;
        Ok(names)
    })
    .await
    .map_err(|e| CoverError::Io(io::Error::other(e)))??;

    match async_fs::remove_file(archive).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            warning!(
                "{}",
                CoverError::ExtractionPermissionDenied(archive.to_path_buf())
            );
        }
        Err(e) => return Err(e.into()),
    }

    let readme = dir.join(README_FILE);
    if readme.is_file() {
        async_fs::remove_file(&readme).await?;
    }
    files.retain(|f| f != &readme);

    Ok(files)
}
