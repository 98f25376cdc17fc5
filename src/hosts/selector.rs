use crate::{error::CoverError, hosts::SearchStrategy, http::HttpTransport, warning};

/// Returns the first host that answers a plain GET of its base URL.
///
/// Hosts are probed one after another in the given order and probing stops
/// at the first one that answers. A failed probe is reported and the next
/// host is tried; there are no retries.
///
/// # Errors
///
/// [`CoverError::NoHostAvailable`] when every probe failed or `hosts` is
/// empty.
pub async fn select(
    hosts: Vec<Box<dyn SearchStrategy>>,
    transport: &dyn HttpTransport,
) -> Result<Box<dyn SearchStrategy>, CoverError> {
    for host in hosts {
        match transport.probe(host.base_url()).await {
            Ok(()) => return Ok(host),
            Err(e) => warning!("{} is down. Err: {}", host.base_url(), e),
        }
    }

    Err(CoverError::NoHostAvailable)
}

/// Probes every host and reports whether it answered, in the given order.
pub async fn probe_all(
    hosts: &[Box<dyn SearchStrategy>],
    transport: &dyn HttpTransport,
) -> Vec<Result<(), CoverError>> {
    let mut results = Vec::with_capacity(hosts.len());
    for host in hosts {
        results.push(transport.probe(host.base_url()).await);
    }
    results
}
