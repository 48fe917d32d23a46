//! The default criterion table.
//!
//! Point budget (sums to 40, so the percentage tops out at 100):
//!
//! | criterion           | target | max |
//! |---------------------|--------|-----|
//! | title_length        | page   | 5   |
//! | meta_description    | page   | 5   |
//! | heading_structure   | page   | 5   |
//! | image_alt_coverage  | page   | 5   |
//! | iframe_absence      | page   | 2   |
//! | email_exposure      | page   | 2   |
//! | homepage_reachable  | site   | 6   |
//! | sitemap_present     | site   | 5   |
//! | robots_present      | site   | 5   |

use super::{Outcome, Rule, ScoreInput, Severity, Target};

/// Builds the default rule table.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new("title_length", Target::Page, title_length),
        Rule::new("meta_description", Target::Page, meta_description),
        Rule::new("heading_structure", Target::Page, heading_structure),
        Rule::new("image_alt_coverage", Target::Page, image_alt_coverage),
        Rule::new("iframe_absence", Target::Page, iframe_absence),
        Rule::new("email_exposure", Target::Page, email_exposure),
        Rule::new("homepage_reachable", Target::Site, homepage_reachable),
        Rule::new("sitemap_present", Target::Site, sitemap_present),
        Rule::new("robots_present", Target::Site, robots_present),
    ]
}

/// Title length in Unicode scalars; the recommended range is 30-60.
fn title_length(input: &ScoreInput) -> Outcome {
    let length = input.facts.title.chars().count();
    match length {
        0 => Outcome::new(0, Severity::Fail, "the page has no title"),
        1..=29 => Outcome::new(
            4,
            Severity::Warn,
            format!("the page title is short ({length} of the recommended 30-60 characters)"),
        ),
        30..=60 => Outcome::new(
            5,
            Severity::Pass,
            format!("the page title length is appropriate ({length} characters)"),
        ),
        _ => Outcome::new(
            3,
            Severity::Warn,
            format!("the page title is long ({length} characters; 30-60 recommended)"),
        ),
    }
}

/// Meta description presence and length; the recommended range is 50-160.
fn meta_description(input: &ScoreInput) -> Outcome {
    match &input.facts.meta_description {
        None => Outcome::new(0, Severity::Fail, "the page has no meta description"),
        Some(description) => {
            let length = description.chars().count();
            match length {
                0 => Outcome::new(0, Severity::Fail, "the meta description is empty"),
                1..=49 => Outcome::new(
                    3,
                    Severity::Warn,
                    format!(
                        "the meta description is short ({length} of the recommended 50-160 characters)"
                    ),
                ),
                50..=160 => Outcome::new(
                    5,
                    Severity::Pass,
                    format!("the meta description length is appropriate ({length} characters)"),
                ),
                _ => Outcome::new(
                    3,
                    Severity::Warn,
                    format!("the meta description is long ({length} characters; 50-160 recommended)"),
                ),
            }
        }
    }
}

/// Exactly one H1 is ideal; headings without an H1 are penalized.
fn heading_structure(input: &ScoreInput) -> Outcome {
    let h1_count = input.facts.h1_headings.len();
    let total = input.facts.headings.len();
    match (h1_count, total) {
        (1, _) => Outcome::new(5, Severity::Pass, "the page has exactly one H1 heading"),
        (0, 0) => Outcome::new(0, Severity::Fail, "the page has no headings"),
        (0, _) => Outcome::new(
            2,
            Severity::Warn,
            format!("the page has {total} headings but no H1"),
        ),
        (n, _) => Outcome::new(
            3,
            Severity::Warn,
            format!("the page has {n} H1 headings; one is recommended"),
        ),
    }
}

/// Every image should carry non-empty alt text.
fn image_alt_coverage(input: &ScoreInput) -> Outcome {
    let with_alt = input.facts.image_alts.len();
    let total = input.facts.image_count;
    if total == 0 {
        Outcome::new(4, Severity::Warn, "the page has no images")
    } else if with_alt == total {
        Outcome::new(
            5,
            Severity::Pass,
            format!("all {total} images have alt text"),
        )
    } else if with_alt > 0 {
        Outcome::new(
            3,
            Severity::Warn,
            format!("{with_alt} of {total} images have alt text"),
        )
    } else {
        Outcome::new(
            0,
            Severity::Fail,
            format!("none of the {total} images have alt text"),
        )
    }
}

fn iframe_absence(input: &ScoreInput) -> Outcome {
    if input.facts.has_iframe {
        Outcome::new(0, Severity::Warn, "the page embeds an iframe")
    } else {
        Outcome::new(2, Severity::Pass, "the page embeds no iframes")
    }
}

/// Plain-text email addresses invite harvesting.
fn email_exposure(input: &ScoreInput) -> Outcome {
    let count = input.facts.emails.len();
    if count == 0 {
        Outcome::new(2, Severity::Pass, "no email addresses are exposed in the page text")
    } else {
        Outcome::new(
            0,
            Severity::Warn,
            format!("{count} email address(es) are exposed in the page text"),
        )
    }
}

fn homepage_reachable(input: &ScoreInput) -> Outcome {
    if input.probes.homepage.is_reachable() {
        Outcome::new(
            6,
            Severity::Pass,
            format!("the site responded: {}", input.probes.homepage.status_line),
        )
    } else {
        Outcome::new(
            0,
            Severity::Fail,
            format!(
                "the site did not respond: {}",
                input.probes.homepage.status_line
            ),
        )
    }
}

fn sitemap_present(input: &ScoreInput) -> Outcome {
    if input.probes.sitemap.is_reachable() {
        Outcome::new(5, Severity::Pass, "sitemap.xml is reachable")
    } else {
        Outcome::new(0, Severity::Fail, "sitemap.xml was not found")
    }
}

fn robots_present(input: &ScoreInput) -> Outcome {
    if input.probes.robots.is_reachable() {
        Outcome::new(5, Severity::Pass, "robots.txt is reachable")
    } else {
        Outcome::new(0, Severity::Fail, "robots.txt was not found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::PageFacts;
    use crate::fetch::{FetchResult, SiteProbes};
    use std::collections::BTreeSet;

    fn facts() -> PageFacts {
        PageFacts {
            title: String::new(),
            meta_description: None,
            link_tags: vec![],
            h1_headings: vec![],
            headings: vec![],
            image_alts: vec![],
            image_count: 0,
            has_iframe: false,
            emails: BTreeSet::new(),
            text_tokens: vec![],
        }
    }

    fn probes() -> SiteProbes {
        SiteProbes {
            homepage: FetchResult::not_found(),
            sitemap: FetchResult::not_found(),
            robots: FetchResult::not_found(),
        }
    }

    fn reachable() -> FetchResult {
        FetchResult {
            status_line: "HTTP/1.1 200 OK".into(),
            headers: vec![],
            body: vec![],
        }
    }

    fn points_for_title(length: usize) -> u32 {
        let mut f = facts();
        f.title = "x".repeat(length);
        let p = probes();
        title_length(&ScoreInput {
            facts: &f,
            probes: &p,
        })
        .points
    }

    #[test]
    fn test_title_length_point_table() {
        let cases = [
            (0, 0),
            (1, 4),
            (29, 4),
            (30, 5),
            (60, 5),
            (61, 3),
            (200, 3),
        ];
        for (length, expected) in cases {
            assert_eq!(
                points_for_title(length),
                expected,
                "title length {length} should award {expected} points"
            );
        }
    }

    #[test]
    fn test_title_length_counts_unicode_scalars_not_bytes() {
        let mut f = facts();
        f.title = "و".repeat(30); // 30 scalars, 60 UTF-8 bytes
        let p = probes();
        let outcome = title_length(&ScoreInput {
            facts: &f,
            probes: &p,
        });
        assert_eq!(outcome.points, 5);
        assert_eq!(outcome.severity, Severity::Pass);
    }

    #[test]
    fn test_title_severities() {
        let p = probes();
        let mut f = facts();
        assert_eq!(
            title_length(&ScoreInput { facts: &f, probes: &p }).severity,
            Severity::Fail
        );
        f.title = "x".repeat(45);
        assert_eq!(
            title_length(&ScoreInput { facts: &f, probes: &p }).severity,
            Severity::Pass
        );
        f.title = "x".repeat(61);
        assert_eq!(
            title_length(&ScoreInput { facts: &f, probes: &p }).severity,
            Severity::Warn
        );
    }

    #[test]
    fn test_meta_description_rule() {
        let p = probes();
        let mut f = facts();
        let outcome = meta_description(&ScoreInput { facts: &f, probes: &p });
        assert_eq!((outcome.points, outcome.severity), (0, Severity::Fail));

        f.meta_description = Some("x".repeat(100));
        let outcome = meta_description(&ScoreInput { facts: &f, probes: &p });
        assert_eq!((outcome.points, outcome.severity), (5, Severity::Pass));

        f.meta_description = Some("short".into());
        let outcome = meta_description(&ScoreInput { facts: &f, probes: &p });
        assert_eq!((outcome.points, outcome.severity), (3, Severity::Warn));

        f.meta_description = Some("x".repeat(300));
        let outcome = meta_description(&ScoreInput { facts: &f, probes: &p });
        assert_eq!((outcome.points, outcome.severity), (3, Severity::Warn));
    }

    #[test]
    fn test_heading_structure_rule() {
        let p = probes();
        let mut f = facts();
        assert_eq!(
            heading_structure(&ScoreInput { facts: &f, probes: &p }).points,
            0
        );

        f.h1_headings = vec!["only".into()];
        f.headings = vec!["only".into()];
        assert_eq!(
            heading_structure(&ScoreInput { facts: &f, probes: &p }).points,
            5
        );

        f.h1_headings = vec!["one".into(), "two".into()];
        f.headings = vec!["one".into(), "two".into()];
        assert_eq!(
            heading_structure(&ScoreInput { facts: &f, probes: &p }).points,
            3
        );

        f.h1_headings = vec![];
        f.headings = vec!["h2 only".into()];
        assert_eq!(
            heading_structure(&ScoreInput { facts: &f, probes: &p }).points,
            2
        );
    }

    #[test]
    fn test_image_alt_coverage_rule() {
        let p = probes();
        let mut f = facts();
        assert_eq!(
            image_alt_coverage(&ScoreInput { facts: &f, probes: &p }).points,
            4
        );

        f.image_count = 2;
        f.image_alts = vec!["a".into(), "b".into()];
        assert_eq!(
            image_alt_coverage(&ScoreInput { facts: &f, probes: &p }).points,
            5
        );

        f.image_alts = vec!["a".into()];
        assert_eq!(
            image_alt_coverage(&ScoreInput { facts: &f, probes: &p }).points,
            3
        );

        f.image_alts = vec![];
        assert_eq!(
            image_alt_coverage(&ScoreInput { facts: &f, probes: &p }).points,
            0
        );
    }

    #[test]
    fn test_site_rules_follow_probe_status() {
        let f = facts();
        let mut p = probes();
        assert_eq!(
            homepage_reachable(&ScoreInput { facts: &f, probes: &p }).points,
            0
        );
        assert_eq!(
            sitemap_present(&ScoreInput { facts: &f, probes: &p }).points,
            0
        );
        assert_eq!(
            robots_present(&ScoreInput { facts: &f, probes: &p }).points,
            0
        );

        p.homepage = reachable();
        p.sitemap = reachable();
        p.robots = reachable();
        assert_eq!(
            homepage_reachable(&ScoreInput { facts: &f, probes: &p }).points,
            6
        );
        assert_eq!(
            sitemap_present(&ScoreInput { facts: &f, probes: &p }).points,
            5
        );
        assert_eq!(
            robots_present(&ScoreInput { facts: &f, probes: &p }).points,
            5
        );
    }

    #[test]
    fn test_default_budget_sums_to_forty() {
        // Best case: perfect page, all probes reachable.
        let mut f = facts();
        f.title = "x".repeat(45);
        f.meta_description = Some("y".repeat(100));
        f.h1_headings = vec!["h".into()];
        f.headings = vec!["h".into()];
        f.image_count = 1;
        f.image_alts = vec!["alt".into()];
        let p = SiteProbes {
            homepage: reachable(),
            sitemap: reachable(),
            robots: reachable(),
        };
        let report = crate::score::Scorer::default().score(&ScoreInput {
            facts: &f,
            probes: &p,
        });
        assert_eq!(report.page_score + report.site_score, 40);
        assert_eq!(report.percent(), 100.0);
    }
}
