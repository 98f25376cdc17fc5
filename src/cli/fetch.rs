use std::path::PathBuf;

use tabled::Table;

use crate::{
    cli::prompt::ConsolePrompt,
    collection::LoftyTagReader,
    error, hosts,
    hosts::SearchStrategy,
    http::ReqwestTransport,
    info, pipeline, success,
    types::SavedFileTableRow,
    warning,
};

/// Finds and saves cover art for the album in `dir`.
///
/// # Arguments
///
/// * `dir` - Directory with the audio files, also where the art is saved.
///   Defaults to the current directory.
/// * `host_names` - Hosts to try, in order. All supported hosts when empty.
///
/// Exits the program with an error message when the run fails.
pub async fn fetch(dir: Option<PathBuf>, host_names: Vec<String>) {
    let dir = match dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => error!("Cannot read current directory. Err: {}", e),
        },
    };

    if !dir.is_dir() {
        error!("{} is not a directory.", dir.display());
    }

    let strategies = match strategies_for(&host_names) {
        Ok(strategies) => strategies,
        Err(name) => error!(
            "Unknown host '{}'. Known hosts: {}",
            name,
            hosts::HOST_NAMES.join(", ")
        ),
    };

    let transport = match ReqwestTransport::new() {
        Ok(transport) => transport,
        Err(e) => error!("Cannot create http client. Err: {}", e),
    };

    let mut prompt = ConsolePrompt::stdin();
    let summary = match pipeline::run(
        &dir,
        strategies,
        &transport,
        &LoftyTagReader,
        &mut prompt,
    )
    .await
    {
        Ok(summary) => summary,
        Err(e) => error!("{}", e),
    };

    if let Some(reason) = &summary.stopped_early {
        warning!("Stopped downloading after a failure: {}", reason);
    }

    if !summary.files.is_empty() {
        let rows: Vec<SavedFileTableRow> = summary
            .files
            .iter()
            .map(|f| SavedFileTableRow {
                file: f
                    .strip_prefix(&dir)
                    .unwrap_or(f)
                    .display()
                    .to_string(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    info!("Cover art from {}", summary.host);
    success!("{}", summary.message());
}

/// Strategies for the given host names, or the first unknown name.
pub fn strategies_for(host_names: &[String]) -> Result<Vec<Box<dyn SearchStrategy>>, String> {
    if host_names.is_empty() {
        return Ok(hosts::default_strategies());
    }

    host_names
        .iter()
        .map(|name| hosts::strategy_for(name).ok_or_else(|| name.clone()))
        .collect()
}
