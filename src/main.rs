//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Supplying the current day of week to the pipeline
//! - User-facing output formatting (plain summary or JSON)
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use colored::*;
use std::process;

use seo_audit::initialization::init_logger_with;
use seo_audit::score::Severity;
use seo_audit::{AnalysisRequest, AnalysisReport, Config, Pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let pipeline = Pipeline::new(&config).context("Failed to initialize pipeline")?;
    let request = AnalysisRequest::from_config(&config, Local::now().weekday());

    match pipeline.run(&request).await {
        Ok(report) => {
            if config.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .context("Failed to serialize report")?
                );
            } else {
                print_report(&report);
            }
            Ok(())
        }
        Err(e) => {
            // Every pipeline error is a user-facing condition (bad input,
            // exhausted quota, unfetchable or oversized page), not a bug.
            eprintln!("{} {e}", "seo_audit:".red());
            process::exit(1);
        }
    }
}

fn print_report(report: &AnalysisReport) {
    println!(
        "{} {}",
        report.url.bold(),
        if report.facts.title.is_empty() {
            "(untitled)".dimmed().to_string()
        } else {
            report.facts.title.clone()
        }
    );
    println!(
        "score: {} (page {} + site {})",
        format!("{:.1}%", report.percent).bold(),
        report.score.page_score,
        report.score.site_score
    );

    println!("\ncriteria:");
    for criterion in &report.score.criteria {
        let severity = match criterion.severity {
            Severity::Pass => criterion.severity.as_str().green(),
            Severity::Warn => criterion.severity.as_str().yellow(),
            Severity::Fail => criterion.severity.as_str().red(),
        };
        println!(
            "  [{severity}] {} (+{}): {}",
            criterion.name, criterion.points_awarded, criterion.message
        );
    }

    if !report.keywords.top_keywords.is_empty() {
        println!("\ntop keywords:");
        for (gram, count) in &report.keywords.top_keywords {
            println!("  {count:>4}  {gram}");
        }
    }

    if !report.site_headers.is_empty() {
        println!("\nresponse headers:");
        for line in &report.site_headers {
            println!("  {line}");
        }
    }
}
