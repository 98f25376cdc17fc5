use tabled::Table;

use crate::{
    error, hosts,
    hosts::selector,
    http::ReqwestTransport,
    types::HostTableRow,
    utils,
};

/// Probes every supported host and prints whether it answered.
pub async fn hosts() {
    let transport = match ReqwestTransport::new() {
        Ok(transport) => transport,
        Err(e) => error!("Cannot create http client. Err: {}", e),
    };

    let strategies = hosts::default_strategies();

    let pb = utils::spinner("Probing hosts...");
    let results = selector::probe_all(&strategies, &transport).await;
    pb.finish_and_clear();

    let rows: Vec<HostTableRow> = strategies
        .iter()
        .zip(results)
        .map(|(strategy, result)| HostTableRow {
            name: strategy.name().to_string(),
            url: strategy.base_url().to_string(),
            status: match result {
                Ok(()) => "up".to_string(),
                Err(e) => format!("down ({})", e),
            },
        })
        .collect();

    println!("{}", Table::new(rows));
}
