//! HTTP GET probe.
//!
//! Uses the curl crate (libcurl) to fetch a URL and materialize the full
//! response body in memory. Remote files are assumed small enough for
//! in-memory comparison.

use crate::error::ProbeError;
use std::time::Duration;

/// Options for a single GET probe.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Per-request wall-clock timeout in seconds.
    pub timeout_secs: u64,
    /// Skip TLS certificate and hostname verification. Opt-in only.
    pub insecure: bool,
    /// Value of the User-Agent header, e.g. "leakprobe/0.1.0".
    pub user_agent: String,
}

/// Status code and full body of one GET response.
#[derive(Debug)]
pub struct FetchResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs one GET against `url`. Redirects are not followed; a redirect
/// status is returned to the caller like any other.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async
/// code. Any libcurl failure (DNS, connect, timeout, TLS handshake, partial
/// body read) surfaces as `ProbeError::Transport`.
pub fn fetch(url: &str, options: &FetchOptions) -> Result<FetchResponse, ProbeError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.useragent(&options.user_agent)?;
    easy.timeout(Duration::from_secs(options.timeout_secs))?;
    easy.connect_timeout(Duration::from_secs(options.timeout_secs))?;
    if options.insecure {
        easy.ssl_verify_peer(false)?;
        easy.ssl_verify_host(false)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(FetchResponse { status, body })
}
