//! # CLI Module
//!
//! The command-line layer of covergrab. It turns parsed arguments into
//! pipeline runs, wires in the real collaborators (reqwest transport, lofty
//! tag reader, console prompt) and presents outcomes to the user.
//!
//! ## Commands
//!
//! - [`fetch`] - Finds and saves cover art for the album in a directory
//! - [`hosts`] - Reports which cover-art hosts are reachable
//!
//! ## Error Handling
//!
//! The pipeline reports every failure as a value. This layer is the only
//! place that ends the program, through the `error!` macro, after printing
//! what went wrong.
//!
//! ## Usage
//!
//! ```bash
//! covergrab fetch                      # album in the current directory
//! covergrab fetch ~/Music/Some\ Album  # album somewhere else
//! covergrab fetch --host archive       # only try the archive host
//! covergrab hosts                      # which hosts are up
//! ```

mod fetch;
mod hosts;
mod prompt;

pub use fetch::fetch;
pub use fetch::strategies_for;
pub use hosts::hosts;
pub use prompt::ConsolePrompt;
