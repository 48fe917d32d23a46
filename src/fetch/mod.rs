//! Header probes and body fetches.
//!
//! Network failures here are data, not control flow: a failed probe yields
//! a synthetic "not found" status line and a failed body fetch yields an
//! empty body. Neither function ever returns an error, which lets the
//! pipeline proceed with partial data instead of aborting outright.

use serde::Serialize;

use crate::config::NOT_FOUND_SENTINEL;

/// The observable outcome of one fetch.
///
/// Created per fetch call, immutable, and discarded after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchResult {
    /// Status line, e.g. `HTTP/1.1 200 OK`. On network failure this is the
    /// sentinel [`NOT_FOUND_SENTINEL`].
    pub status_line: String,
    /// Response header lines (`name: value`), in wire order.
    pub headers: Vec<String>,
    /// Response body; empty for header probes and failed body fetches.
    pub body: Vec<u8>,
}

impl FetchResult {
    /// The sentinel result standing in for a fetch that failed at the
    /// network level.
    pub fn not_found() -> Self {
        FetchResult {
            status_line: NOT_FOUND_SENTINEL.to_string(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Parses the numeric status code out of the status line, if present.
    pub fn status_code(&self) -> Option<u16> {
        self.status_line.split_whitespace().nth(1)?.parse().ok()
    }

    /// Whether the probed URL answered at all.
    ///
    /// Redirect responses count as reachable: the probe client does not
    /// follow redirects, so a homepage that 301s to `www.` still exists.
    pub fn is_reachable(&self) -> bool {
        matches!(self.status_code(), Some(code) if (200..400).contains(&code))
    }

    /// Status line plus header lines, with empty entries dropped, for
    /// presentation hosts that render the raw probe output.
    pub fn header_lines(&self) -> Vec<String> {
        std::iter::once(self.status_line.clone())
            .chain(self.headers.iter().cloned())
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

/// Header-probe results for the three site-level URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteProbes {
    /// Probe of the submitted URL itself.
    pub homepage: FetchResult,
    /// Probe of `{scheme}://{host}/sitemap.xml`.
    pub sitemap: FetchResult,
    /// Probe of `{scheme}://{host}/robots.txt`.
    pub robots: FetchResult,
}

fn status_line_of(response: &reqwest::Response) -> String {
    format!("{:?} {}", response.version(), response.status())
}

fn header_lines_of(response: &reqwest::Response) -> Vec<String> {
    response
        .headers()
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or("")))
        .collect()
}

/// Probes a URL with a HEAD request and returns its status line and headers.
///
/// Redirects are not followed (the caller wants the status of this exact
/// URL) and no body is downloaded. On any network failure the sentinel
/// [`FetchResult::not_found`] is returned instead of an error.
pub async fn fetch_headers(client: &reqwest::Client, url: &str) -> FetchResult {
    match client.head(url).send().await {
        Ok(response) => {
            let result = FetchResult {
                status_line: status_line_of(&response),
                headers: header_lines_of(&response),
                body: Vec::new(),
            };
            log::debug!("header probe {} -> {}", url, result.status_line);
            result
        }
        Err(e) => {
            log::debug!("header probe failed for {}: {}", url, e);
            FetchResult::not_found()
        }
    }
}

/// Fetches a page body, following redirects.
///
/// On any network failure (including a failure while streaming the body)
/// the body is empty; callers treat an empty body as "nothing to analyze".
pub async fn fetch_body(client: &reqwest::Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            log::debug!("body fetch failed for {}: {}", url, e);
            return FetchResult::not_found();
        }
    };

    let status_line = status_line_of(&response);
    let headers = header_lines_of(&response);
    let body = match response.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            log::debug!("body read failed for {}: {}", url, e);
            Vec::new()
        }
    };
    log::debug!("body fetch {} -> {} ({} bytes)", url, status_line, body.len());

    FetchResult {
        status_line,
        headers,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_sentinel_shape() {
        let sentinel = FetchResult::not_found();
        assert_eq!(sentinel.status_line, "HTTP/1.1 404 Not Found");
        assert!(sentinel.headers.is_empty());
        assert!(sentinel.body.is_empty());
        assert!(!sentinel.is_reachable());
    }

    #[test]
    fn test_status_code_parsing() {
        let ok = FetchResult {
            status_line: "HTTP/1.1 200 OK".into(),
            headers: vec![],
            body: vec![],
        };
        assert_eq!(ok.status_code(), Some(200));
        assert!(ok.is_reachable());

        let redirect = FetchResult {
            status_line: "HTTP/2.0 301 Moved Permanently".into(),
            headers: vec![],
            body: vec![],
        };
        assert_eq!(redirect.status_code(), Some(301));
        assert!(redirect.is_reachable());

        let garbage = FetchResult {
            status_line: "garbage".into(),
            headers: vec![],
            body: vec![],
        };
        assert_eq!(garbage.status_code(), None);
        assert!(!garbage.is_reachable());
    }

    #[test]
    fn test_header_lines_drop_empty_entries() {
        let result = FetchResult {
            status_line: "HTTP/1.1 200 OK".into(),
            headers: vec!["server: nginx".into(), "   ".into(), String::new()],
            body: vec![],
        };
        assert_eq!(
            result.header_lines(),
            vec!["HTTP/1.1 200 OK".to_string(), "server: nginx".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_headers_returns_sentinel_on_unresolvable_host() {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .expect("client should build");
        // RFC 2606 reserves .invalid; this never resolves.
        let result = fetch_headers(&client, "http://host.invalid/").await;
        assert_eq!(result, FetchResult::not_found());
    }

    #[tokio::test]
    async fn test_fetch_body_returns_empty_body_on_unresolvable_host() {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .expect("client should build");
        let result = fetch_body(&client, "http://host.invalid/").await;
        assert!(result.body.is_empty());
        assert_eq!(result.status_line, "HTTP/1.1 404 Not Found");
    }
}
