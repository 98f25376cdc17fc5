mod common;

use std::{fs, path::Path};

use common::FakeTags;
use covergrab::{
    collection::{LoftyTagReader, TagReader, infer_identity, list_audio_files},
    error::CoverError,
    types::{Identity, NormalizedQuery},
};

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}

#[test]
fn test_list_audio_files_filters_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "02 - b.flac");
    touch(dir.path(), "01 - a.mp3");
    touch(dir.path(), "03 - c.OGG");
    touch(dir.path(), "04 - d.wav");
    touch(dir.path(), "cover.jpg");
    touch(dir.path(), "notflac");
    touch(dir.path(), "playlist.m3u");
    fs::create_dir(dir.path().join("extras.mp3")).unwrap();
    fs::create_dir(dir.path().join("disc2")).unwrap();
    touch(&dir.path().join("disc2"), "05 - e.mp3");

    let files = list_audio_files(dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(
        names,
        vec!["01 - a.mp3", "02 - b.flac", "03 - c.OGG", "04 - d.wav"]
    );
}

#[cfg(unix)]
#[test]
fn test_list_audio_files_follows_symlinks() {
    let library = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    touch(library.path(), "01 - a.mp3");
    std::os::unix::fs::symlink(library.path().join("01 - a.mp3"), dir.path().join("01.mp3"))
        .unwrap();
    std::os::unix::fs::symlink(library.path().join("gone.mp3"), dir.path().join("02.mp3"))
        .unwrap();
    std::os::unix::fs::symlink(library.path(), dir.path().join("linked.mp3")).unwrap();

    let files = list_audio_files(dir.path()).unwrap();

    assert_eq!(files, vec![dir.path().join("01.mp3")]);
}

#[test]
fn test_list_audio_files_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let result = list_audio_files(&dir.path().join("missing"));
    assert!(matches!(result, Err(CoverError::Io(_))));
}

#[test]
fn test_infer_identity_single_artist() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.mp3");
    touch(dir.path(), "b.mp3");
    let tags = FakeTags::new()
        .file("a.mp3", "Ought", "More Than Any Other Day")
        .file("b.mp3", "Ought", "More Than Any Other Day");

    let files = list_audio_files(dir.path()).unwrap();
    let identity = infer_identity(dir.path(), &files, &tags).unwrap();

    assert_eq!(
        identity,
        Identity {
            artist: "Ought".to_string(),
            album: "More Than Any Other Day".to_string(),
        }
    );
}

#[test]
fn test_infer_identity_various_artists() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.mp3", "b.mp3", "c.mp3"] {
        touch(dir.path(), name);
    }
    let tags = FakeTags::new()
        .file("a.mp3", "Artist One", "Compilation")
        .file("b.mp3", "Artist Two", "Compilation")
        .file("c.mp3", "Artist Three", "Compilation");

    let files = list_audio_files(dir.path()).unwrap();
    let identity = infer_identity(dir.path(), &files, &tags).unwrap();
    let query = NormalizedQuery::from_identity(&identity);

    assert_eq!(identity.artist, "Various Artists");
    assert_eq!(query.artist, "Various+Artists");
    assert_eq!(query.album, "Compilation");
}

#[test]
fn test_infer_identity_ambiguous_album() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.mp3");
    touch(dir.path(), "b.mp3");
    let tags = FakeTags::new()
        .file("a.mp3", "Ought", "More Than Any Other Day")
        .file("b.mp3", "Ought", "Sun Coming Down");

    let files = list_audio_files(dir.path()).unwrap();
    let result = infer_identity(dir.path(), &files, &tags);

    match result {
        Err(CoverError::AmbiguousAlbum(albums)) => {
            assert_eq!(albums, vec!["More Than Any Other Day", "Sun Coming Down"]);
        }
        other => panic!("expected AmbiguousAlbum, got {:?}", other),
    }
}

#[test]
fn test_infer_identity_unreadable_tags() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.mp3");
    touch(dir.path(), "b.mp3");
    let tags = FakeTags::new().file("a.mp3", "Ought", "More Than Any Other Day");

    let files = list_audio_files(dir.path()).unwrap();
    let result = infer_identity(dir.path(), &files, &tags);

    assert!(matches!(result, Err(CoverError::UnreadableTags { .. })));
}

#[test]
fn test_infer_identity_no_files() {
    let dir = tempfile::tempdir().unwrap();

    let result = infer_identity(dir.path(), &[], &FakeTags::new());

    assert!(matches!(result, Err(CoverError::NoAudioFiles(_))));
}

#[test]
fn test_lofty_reader_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.mp3");
    fs::write(&path, b"definitely not an mp3 file").unwrap();

    let result = LoftyTagReader.read_tags(&path);

    assert!(matches!(result, Err(CoverError::UnreadableTags { .. })));
}
