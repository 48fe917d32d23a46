//! Configuration constants.
//!
//! This module defines the operational parameters used throughout the
//! analysis pipeline: timeouts, quotas, size limits, and scoring factors.

/// Per-request fetch timeout in seconds (applies to header probes and the
/// body fetch alike).
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Identifying User-Agent string sent with every request.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; MyBot/1.0)";

/// Number of analysis requests allowed per identity per day.
pub const DAILY_REQUEST_LIMIT: u32 = 10;

/// Maximum number of visible-text tokens the pipeline will analyze.
///
/// Pages producing more tokens than this are declined with a
/// "content too large" error instead of running keyword and score analysis.
/// This is a cost-control policy, not a correctness limit.
pub const MAX_TEXT_TOKENS: usize = 10_000;

/// Keywords kept per n-gram size in the merged keyword summary.
pub const TOP_KEYWORDS_PER_SIZE: usize = 5;

/// Factor applied to the combined page + site score to obtain a nominal
/// percentage.
///
/// The default rule table sums to 40 points, so the maximum is 100. A custom
/// rule table whose points sum past 40 produces percentages above 100; the
/// value is reported as computed, never capped.
pub const SCORE_PERCENT_FACTOR: f64 = 2.5;

/// Maximum URL length (2048 characters) to prevent DoS attacks via extremely
/// long URLs. This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Sentinel status line returned when a fetch fails at the network level.
///
/// Failures are data, not control flow: callers see this placeholder instead
/// of an error and the pipeline proceeds with partial data.
pub const NOT_FOUND_SENTINEL: &str = "HTTP/1.1 404 Not Found";

/// Default path of the append-only captured-email log.
pub const DEFAULT_EMAILS_PATH: &str = "./captured_emails.txt";
