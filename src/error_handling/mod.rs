//! Error type definitions.
//!
//! Every error in this crate is recoverable: the caller shows a message and
//! the user either corrects their input, waits for the quota to reset, or
//! accepts the decline. Network failures inside the fetcher never surface
//! here at all; they degrade to sentinel values and the pipeline continues
//! with partial data.

use log::SetLoggerError;
use thiserror::Error;

/// Errors surfaced to the caller of the analysis pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The submitted URL failed format validation (missing scheme/host,
    /// unsupported scheme, or too long). No fetches are performed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The submitted email address failed format validation.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The identity exhausted its daily request quota. The quota resets at
    /// the next day rollover; nothing is recorded for a refused request.
    #[error("daily request limit reached; please try again tomorrow")]
    RateLimited,

    /// The body fetch produced no content, so there is nothing to extract
    /// facts from. Header probes alone cannot drive the pipeline.
    #[error("page body could not be fetched; nothing to analyze")]
    EmptyBody,

    /// The page produced more visible-text tokens than the analysis cap.
    /// The pipeline declines cleanly instead of running keyword and score
    /// analysis on oversized content.
    #[error("page content is too large to analyze ({tokens} tokens)")]
    ContentTooLarge {
        /// Number of tokens the page produced.
        tokens: usize,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Error from the email capture sink.
///
/// Recording failures are logged by the pipeline and never abort a run.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The append to the capture log failed.
    #[error("failed to append to capture log: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_messages_are_user_facing() {
        assert_eq!(
            AnalysisError::InvalidUrl("not a url".into()).to_string(),
            "invalid URL: not a url"
        );
        assert_eq!(
            AnalysisError::RateLimited.to_string(),
            "daily request limit reached; please try again tomorrow"
        );
        assert_eq!(
            AnalysisError::ContentTooLarge { tokens: 10_001 }.to_string(),
            "page content is too large to analyze (10001 tokens)"
        );
    }
}
