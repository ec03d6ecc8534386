use std::time::Instant;

use tracing::{debug, warn};
use ureq::tls::TlsConfig;

use super::FetchOptions;
use crate::error::FetchError;

fn build_agent(options: &FetchOptions) -> ureq::Agent {
    if options.insecure {
        warn!("TLS certificate verification is disabled (--insecure)");
    }
    ureq::Agent::config_builder()
        .timeout_global(Some(options.timeout))
        .tls_config(
            TlsConfig::builder()
                .disable_verification(options.insecure)
                .build(),
        )
        .build()
        .into()
}

fn map_error(url: &str, err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::Timeout(_) => FetchError::Timeout {
            url: url.to_string(),
        },
        ureq::Error::StatusCode(status) => FetchError::Status {
            url: url.to_string(),
            status,
        },
        other => FetchError::Network {
            url: url.to_string(),
            message: other.to_string(),
        },
    }
}

/// Fetch the raw response body. No retries: a failed fetch fails the run.
pub(super) fn fetch_body(options: &FetchOptions) -> Result<String, FetchError> {
    let start = Instant::now();
    let agent = build_agent(options);

    debug!(url = %options.url, timeout_secs = options.timeout.as_secs(), "fetching zone counts");
    let response = agent
        .get(&options.url)
        .call()
        .map_err(|e| map_error(&options.url, e))?;

    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| map_error(&options.url, e))?;

    debug!(
        bytes = body.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "fetched zone counts"
    );
    Ok(body)
}
