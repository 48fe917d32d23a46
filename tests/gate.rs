// Tests of the pipeline's entry gates: input validation, the daily quota,
// and email capture. Fetches target an RFC 2606 .invalid host, so these run
// without touching a real network; the body fetch degrades to an empty body.

use std::sync::Arc;

use chrono::Weekday;
use seo_audit::error_handling::AnalysisError;
use seo_audit::rate_limit::{MemoryCounterStore, RateLimiter};
use seo_audit::{AnalysisRequest, Config, Pipeline};

fn config_with_sink(path: &std::path::Path) -> Config {
    Config {
        emails_path: path.to_path_buf(),
        timeout_seconds: 2,
        ..Default::default()
    }
}

fn request(url: &str, email: &str) -> AnalysisRequest {
    AnalysisRequest {
        url: url.to_string(),
        email: email.to_string(),
        identity: "198.51.100.4".to_string(),
        day: Weekday::Mon,
    }
}

#[tokio::test]
async fn invalid_email_stops_before_any_side_effect() {
    let dir = tempfile::tempdir().unwrap();
    let emails = dir.path().join("emails.txt");
    let pipeline = Pipeline::new(&config_with_sink(&emails)).unwrap();

    let result = pipeline
        .run(&request("https://example.com", "not-an-email"))
        .await;
    assert!(matches!(result, Err(AnalysisError::InvalidEmail(_))));
    // Nothing was recorded: the capture file was never created.
    assert!(!emails.exists());
}

#[tokio::test]
async fn invalid_url_stops_before_any_side_effect() {
    let dir = tempfile::tempdir().unwrap();
    let emails = dir.path().join("emails.txt");
    let pipeline = Pipeline::new(&config_with_sink(&emails)).unwrap();

    let result = pipeline
        .run(&request("not a url!!!", "user@example.com"))
        .await;
    assert!(matches!(result, Err(AnalysisError::InvalidUrl(_))));
    assert!(!emails.exists());
}

#[tokio::test]
async fn unreachable_host_yields_empty_body_after_recording_email() {
    let dir = tempfile::tempdir().unwrap();
    let emails = dir.path().join("emails.txt");
    let pipeline = Pipeline::new(&config_with_sink(&emails)).unwrap();

    let result = pipeline
        .run(&request("http://host.invalid/", "user@example.com"))
        .await;
    assert!(matches!(result, Err(AnalysisError::EmptyBody)));

    // The request passed validation and the gate, so the email was captured
    // even though the fetch produced nothing.
    let contents = std::fs::read_to_string(&emails).unwrap();
    assert_eq!(contents, "user@example.com\n");
}

#[tokio::test]
async fn quota_refusal_comes_before_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let emails = dir.path().join("emails.txt");
    let store = Arc::new(MemoryCounterStore::new());
    let pipeline = Pipeline::new(&config_with_sink(&emails))
        .unwrap()
        .with_limiter(RateLimiter::new(store, 1));

    let first = pipeline
        .run(&request("http://host.invalid/", "user@example.com"))
        .await;
    assert!(matches!(first, Err(AnalysisError::EmptyBody)));

    let second = pipeline
        .run(&request("http://host.invalid/", "user@example.com"))
        .await;
    assert!(matches!(second, Err(AnalysisError::RateLimited)));

    // Only the admitted run recorded an email.
    let contents = std::fs::read_to_string(&emails).unwrap();
    assert_eq!(contents, "user@example.com\n");
}
