//! seo_audit library: webpage SEO analysis.
//!
//! Fetches a target page plus its sitemap.xml and robots.txt, extracts
//! structural SEO signals (title, meta description, headings, image alt
//! text, link tags, iframes, embedded emails, keyword n-gram frequency),
//! and produces a numeric score from a declarative rule table. Entry to the
//! pipeline is gated by a per-identity daily quota.
//!
//! # Example
//!
//! ```no_run
//! use chrono::{Datelike, Local};
//! use seo_audit::{AnalysisRequest, Config, Pipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".into(),
//!     email: "user@example.com".into(),
//!     ..Default::default()
//! };
//!
//! let pipeline = Pipeline::new(&config)?;
//! let request = AnalysisRequest::from_config(&config, Local::now().weekday());
//! let report = pipeline.run(&request).await?;
//! println!("score: {:.1}%", report.percent);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! [`Pipeline::run`] requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call it from within an async context.

#![warn(missing_docs)]

pub mod capture;
pub mod config;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod input;
pub mod keywords;
pub mod rate_limit;
mod report;
pub mod score;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::AnalysisError;
pub use report::AnalysisReport;
pub use run::{analyze_html, AnalysisRequest, Pipeline};

// Internal run module (pipeline orchestration)
mod run {
    use chrono::Weekday;
    use log::{info, warn};

    use crate::capture::{EmailSink, FileEmailSink};
    use crate::config::{Config, MAX_TEXT_TOKENS};
    use crate::error_handling::{AnalysisError, InitializationError};
    use crate::extract::extract;
    use crate::fetch::{fetch_body, fetch_headers, SiteProbes};
    use crate::initialization::{init_body_client, init_probe_client};
    use crate::input::{validate_email, validate_url};
    use crate::keywords::analyze;
    use crate::rate_limit::RateLimiter;
    use crate::report::AnalysisReport;
    use crate::score::{ScoreInput, Scorer};

    /// One inbound analysis request.
    ///
    /// The caller supplies the current day of the week; the pipeline is
    /// otherwise clock-free, which keeps the quota logic testable with
    /// injected days.
    #[derive(Debug, Clone)]
    pub struct AnalysisRequest {
        /// URL of the page to analyze (validated before any fetch).
        pub url: String,
        /// Email address of the requester (validated, then recorded).
        pub email: String,
        /// Opaque client identity for the daily quota (e.g., a network
        /// address). Treated as a string key, never parsed.
        pub identity: String,
        /// Current day of week, used to select the quota bucket.
        pub day: Weekday,
    }

    impl AnalysisRequest {
        /// Builds a request from CLI configuration plus the current day.
        pub fn from_config(config: &Config, day: Weekday) -> Self {
            AnalysisRequest {
                url: config.url.clone(),
                email: config.email.clone(),
                identity: config.identity.clone(),
                day,
            }
        }
    }

    /// The analysis pipeline: rate gate, fetches, extraction, keyword
    /// analysis, and scoring wired together.
    ///
    /// Holds the two HTTP clients (built once), the rate limiter, the email
    /// sink, and the scorer. All collaborators can be swapped via the
    /// `with_*` builders, which is how tests inject fakes and hosts extend
    /// the rule table.
    pub struct Pipeline {
        probe_client: reqwest::Client,
        body_client: reqwest::Client,
        limiter: RateLimiter,
        sink: Box<dyn EmailSink>,
        scorer: Scorer,
    }

    impl Pipeline {
        /// Builds a pipeline from configuration with the default
        /// collaborators: an in-memory rate limiter, a file-backed email
        /// sink, and the default rule table.
        ///
        /// # Errors
        ///
        /// Returns an error if either HTTP client fails to build.
        pub fn new(config: &Config) -> Result<Self, InitializationError> {
            Ok(Pipeline {
                probe_client: init_probe_client(config)?,
                body_client: init_body_client(config)?,
                limiter: RateLimiter::in_memory(),
                sink: Box::new(FileEmailSink::new(config.emails_path.clone())),
                scorer: Scorer::default(),
            })
        }

        /// Replaces the rate limiter (e.g., one over a shared store).
        pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
            self.limiter = limiter;
            self
        }

        /// Replaces the email sink.
        pub fn with_sink(mut self, sink: Box<dyn EmailSink>) -> Self {
            self.sink = sink;
            self
        }

        /// Replaces the scorer (e.g., one with an extended rule table).
        pub fn with_scorer(mut self, scorer: Scorer) -> Self {
            self.scorer = scorer;
            self
        }

        /// Runs one analysis.
        ///
        /// Steps: validate both inputs, consume one quota slot, record the
        /// email (failures logged, never fatal), fan out the three header
        /// probes and the body fetch concurrently, then extract, analyze,
        /// and score sequentially.
        ///
        /// # Errors
        ///
        /// Returns an [`AnalysisError`] when validation fails, the quota is
        /// exhausted, the body fetch yields nothing, or the page exceeds
        /// the token cap. Header-probe failures are not errors; they
        /// degrade to sentinel values and the report is produced from
        /// partial data.
        pub async fn run(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
            let url = validate_url(&request.url)?;
            let email = validate_email(&request.email)?;

            if !self.limiter.allow(&request.identity, request.day) {
                return Err(AnalysisError::RateLimited);
            }

            if let Err(e) = self.sink.record(&email) {
                // Losing one capture line is not worth failing the run.
                warn!("failed to record email: {e}");
            }

            // validate_url guarantees a host.
            let mut origin = format!(
                "{}://{}",
                url.scheme(),
                url.host_str().unwrap_or_default()
            );
            if let Some(port) = url.port() {
                origin.push_str(&format!(":{port}"));
            }
            let sitemap_url = format!("{origin}/sitemap.xml");
            let robots_url = format!("{origin}/robots.txt");

            info!("analyzing {}", url);
            let (homepage, sitemap, robots, page) = tokio::join!(
                fetch_headers(&self.probe_client, url.as_str()),
                fetch_headers(&self.probe_client, &sitemap_url),
                fetch_headers(&self.probe_client, &robots_url),
                fetch_body(&self.body_client, url.as_str()),
            );

            if page.body.is_empty() {
                return Err(AnalysisError::EmptyBody);
            }

            let html = String::from_utf8_lossy(&page.body);
            let probes = SiteProbes {
                homepage,
                sitemap,
                robots,
            };
            analyze_html(url.as_str(), &html, &probes, &self.scorer)
        }
    }

    /// The pure tail of the pipeline: HTML in, report out.
    ///
    /// Extraction, keyword analysis, and scoring with no I/O, so the full
    /// transformation is testable (and reproducible) without a network.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ContentTooLarge`] when the page produces
    /// more visible-text tokens than the analysis cap.
    pub fn analyze_html(
        url: &str,
        html: &str,
        probes: &SiteProbes,
        scorer: &Scorer,
    ) -> Result<AnalysisReport, AnalysisError> {
        let facts = extract(html);

        let tokens = facts.text_tokens.len();
        if tokens > MAX_TEXT_TOKENS {
            info!("declining {}: {} tokens exceed the cap", url, tokens);
            return Err(AnalysisError::ContentTooLarge { tokens });
        }

        let keywords = analyze(&facts.text_tokens);
        let score = scorer.score(&ScoreInput {
            facts: &facts,
            probes,
        });
        let percent = score.percent();

        Ok(AnalysisReport {
            url: url.to_string(),
            site_headers: probes.homepage.header_lines(),
            facts,
            keywords,
            score,
            percent,
        })
    }
}
