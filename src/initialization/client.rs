//! HTTP client initialization.
//!
//! Two clients back the pipeline:
//! - the *body* client follows redirects and (by default) accepts invalid
//!   TLS certificates, mirroring the tolerant behavior pages are fetched
//!   with in the wild;
//! - the *probe* client never follows redirects, so header-only checks
//!   report the status of the exact URL they were given.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for body fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Timeout from the config
/// - Redirect following enabled (up to 10 hops)
/// - Invalid TLS certificates accepted when `config.accept_invalid_certs`
///   is set (the default). This is a deliberate security trade-off: the
///   fetch tolerates broken certificate chains at the cost of exposing the
///   connection to interception. See `Config::accept_invalid_certs`.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_body_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()
}

/// Initializes the HTTP client used for header-only probes.
///
/// Creates a `reqwest::Client` with redirects disabled so a probe reports
/// the status line of the URL it was given rather than wherever a redirect
/// chain ends up.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_probe_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}
