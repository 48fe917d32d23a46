//! Scoring: a declarative rule table over extracted facts.
//!
//! The engine knows nothing about SEO; it just evaluates each [`Rule`]
//! against the input and accumulates points into the page or site bucket
//! depending on the rule's target. New criteria are added by appending a
//! rule, never by touching the engine.
//!
//! Scoring is a pure function of its input: identical facts and probes
//! produce an identical report, every time.

mod rules;

pub use rules::default_rules;

use serde::Serialize;
use strum_macros::EnumIter;

use crate::config::SCORE_PERCENT_FACTOR;
use crate::extract::PageFacts;
use crate::fetch::SiteProbes;

/// How a criterion judged the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter)]
pub enum Severity {
    /// The criterion failed outright.
    Fail,
    /// The criterion passed with reservations.
    Warn,
    /// The criterion passed cleanly.
    Pass,
}

impl Severity {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fail => "fail",
            Severity::Warn => "warn",
            Severity::Pass => "pass",
        }
    }
}

/// Whether a rule's points count toward the page score or the site score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Derived from the page body (facts).
    Page,
    /// Derived from the site-level header probes.
    Site,
}

/// Everything a rule may look at.
pub struct ScoreInput<'a> {
    /// Facts extracted from the page body.
    pub facts: &'a PageFacts,
    /// Header-probe results for homepage, sitemap, and robots.txt.
    pub probes: &'a SiteProbes,
}

/// The judgement one rule produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Points awarded.
    pub points: u32,
    /// User-facing explanation.
    pub message: String,
    /// Severity of the judgement.
    pub severity: Severity,
}

impl Outcome {
    /// Convenience constructor.
    pub fn new(points: u32, severity: Severity, message: impl Into<String>) -> Self {
        Outcome {
            points,
            message: message.into(),
            severity,
        }
    }
}

/// One scored check: a name, a target bucket, and a judgement function.
pub struct Rule {
    /// Stable criterion name, used in reports and logs.
    pub name: &'static str,
    /// Which score bucket the points land in.
    pub target: Target,
    /// The judgement function.
    pub evaluate: Box<dyn Fn(&ScoreInput) -> Outcome + Send + Sync>,
}

impl Rule {
    /// Builds a rule from a plain function or closure.
    pub fn new(
        name: &'static str,
        target: Target,
        evaluate: impl Fn(&ScoreInput) -> Outcome + Send + Sync + 'static,
    ) -> Self {
        Rule {
            name,
            target,
            evaluate: Box::new(evaluate),
        }
    }
}

/// The outcome of one criterion, as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionResult {
    /// Criterion name.
    pub name: String,
    /// Points this criterion contributed.
    pub points_awarded: u32,
    /// User-facing explanation.
    pub message: String,
    /// Severity of the judgement.
    pub severity: Severity,
}

/// Aggregate score plus the per-criterion breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    /// Points from site-level criteria (header probes).
    pub site_score: u32,
    /// Points from page-level criteria (extracted facts).
    pub page_score: u32,
    /// Per-criterion results, in rule-table order.
    pub criteria: Vec<CriterionResult>,
}

impl ScoreReport {
    /// Nominal percentage: `(page_score + site_score) * 2.5`.
    ///
    /// The default rule table sums to 40 points, so this tops out at 100.
    /// A custom table summing past 40 yields values above 100; the value is
    /// reported as computed, never capped.
    pub fn percent(&self) -> f64 {
        f64::from(self.page_score + self.site_score) * SCORE_PERCENT_FACTOR
    }
}

/// Evaluates a rule table against score input.
pub struct Scorer {
    rules: Vec<Rule>,
}

impl Default for Scorer {
    fn default() -> Self {
        Scorer::new(default_rules())
    }
}

impl Scorer {
    /// Builds a scorer over an explicit rule table.
    pub fn new(rules: Vec<Rule>) -> Self {
        Scorer { rules }
    }

    /// Appends a rule to the table.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Evaluates every rule and accumulates the score buckets.
    pub fn score(&self, input: &ScoreInput) -> ScoreReport {
        let mut site_score = 0;
        let mut page_score = 0;
        let mut criteria = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let outcome = (rule.evaluate)(input);
            log::debug!(
                "criterion {}: {} points ({})",
                rule.name,
                outcome.points,
                outcome.severity.as_str()
            );
            match rule.target {
                Target::Page => page_score += outcome.points,
                Target::Site => site_score += outcome.points,
            }
            criteria.push(CriterionResult {
                name: rule.name.to_string(),
                points_awarded: outcome.points,
                message: outcome.message,
                severity: outcome.severity,
            });
        }

        ScoreReport {
            site_score,
            page_score,
            criteria,
        }
    }
}
