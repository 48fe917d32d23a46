//! The assembled analysis report.
//!
//! This is the structured output handed to the presentation host; rendering
//! it to markup (or anything else) is the host's concern. The whole report
//! serializes to JSON.

use serde::Serialize;

use crate::extract::PageFacts;
use crate::keywords::KeywordSummary;
use crate::score::ScoreReport;

/// Everything one analysis run produced.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The analyzed URL, normalized.
    pub url: String,
    /// Status line and header lines from the homepage probe, empties
    /// dropped, for hosts that render the raw response headers.
    pub site_headers: Vec<String>,
    /// Structural facts extracted from the page.
    pub facts: PageFacts,
    /// N-gram frequency tables and the merged top keywords.
    pub keywords: KeywordSummary,
    /// Per-criterion points and the page/site score buckets.
    pub score: ScoreReport,
    /// Nominal percentage, `(page_score + site_score) * 2.5`.
    pub percent: f64,
}

impl AnalysisReport {
    /// Link-tag attribute text joined by `", "`, the presentation form.
    pub fn link_tags_joined(&self) -> String {
        self.facts.link_tags.join(", ")
    }

    /// All headings joined by `", "`, the presentation form.
    pub fn headings_joined(&self) -> String {
        self.facts.headings.join(", ")
    }
}
