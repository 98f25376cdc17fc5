//! Configuration management for the cover art grabber.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file. Every setting has a
//! default, so the tool works without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

pub const DEFAULT_GALLERY_URL: &str = "http://www.allcdcovers.com";
pub const DEFAULT_ARCHIVE_URL: &str = "http://coverlib.com";
pub const DEFAULT_CHUNK_SIZE: usize = 1024;
pub const MAX_CHUNK_SIZE: usize = 8 * 1024 * 1024;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/covergrab/.env`
/// - macOS: `~/Library/Application Support/covergrab/.env`
/// - Windows: `%LOCALAPPDATA%/covergrab/.env`
///
/// A missing file is fine. The directory is created so the build script and
/// users have a place to drop the file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("covergrab/.env");
    path
}

/// Base URL of the image gallery host.
///
/// Read from `COVERGRAB_GALLERY_URL`, defaults to [`DEFAULT_GALLERY_URL`].
pub fn gallery_url() -> String {
    env::var("COVERGRAB_GALLERY_URL").unwrap_or_else(|_| DEFAULT_GALLERY_URL.to_string())
}

/// Base URL of the archive distribution host.
///
/// Read from `COVERGRAB_ARCHIVE_URL`, defaults to [`DEFAULT_ARCHIVE_URL`].
pub fn archive_url() -> String {
    env::var("COVERGRAB_ARCHIVE_URL").unwrap_or_else(|_| DEFAULT_ARCHIVE_URL.to_string())
}

/// Write buffer capacity in bytes used while streaming downloads to disk.
///
/// Read from `COVERGRAB_CHUNK_SIZE`, see [`parse_chunk_size`].
pub fn chunk_size() -> usize {
    parse_chunk_size(env::var("COVERGRAB_CHUNK_SIZE").ok().as_deref())
}

/// Unparsable or zero values fall back to [`DEFAULT_CHUNK_SIZE`], larger
/// values are capped at [`MAX_CHUNK_SIZE`].
pub fn parse_chunk_size(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
        .map(|v| v.min(MAX_CHUNK_SIZE))
        .unwrap_or(DEFAULT_CHUNK_SIZE)
}

/// User agent sent with every request.
pub fn user_agent() -> String {
    env::var("COVERGRAB_USER_AGENT")
        .unwrap_or_else(|_| format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
}
