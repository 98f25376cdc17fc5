//! Cover Art Grabber Library
//!
//! This library finds and downloads cover art for the album stored in a
//! music folder. It reads the artist and album from the tags of the audio
//! files, picks the first reachable cover-art host, scrapes its search and
//! detail pages and saves the images (or unpacked image archives) next to the
//! music.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `collection` - Audio file discovery and album identity inference
//! - `config` - Configuration management and environment variables
//! - `error` - The crate error type
//! - `hosts` - Search strategies for the supported cover-art hosts
//! - `http` - HTTP transport used for probing, scraping and downloading
//! - `pipeline` - The search-and-retrieve pipeline
//! - `types` - Data structures and type definitions
//! - `utils` - Query normalization and small helpers
//!
//! # Example
//!
//! ```
//! use covergrab::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> covergrab::Res<()> {
//!     config::load_env().await?;
//!     cli::fetch(None, Vec::new()).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod hosts;
pub mod http;
pub mod pipeline;
pub mod types;
pub mod utils;

pub use error::CoverError;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command layer where errors of different origins are only
/// reported, never matched on. The pipeline itself returns
/// [`CoverError`](crate::error::CoverError).
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Using {} to run search.", host);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("{} images found and saved to disk.", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the program with exit code 1. Only the command layer uses this
/// macro; library code returns [`CoverError`](crate::error::CoverError)
/// values instead.
///
/// # Example
///
/// ```
/// error!("All search hosts are down.");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a host that did not answer its probe
/// or a detail page without the expected link.
///
/// # Example
///
/// ```
/// warning!("{} is down.", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
