// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Command handlers return data; this module handles presentation in
//! text or JSON. Logs go to stderr, the report goes to stdout.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use anti_stale_core::{AuditReport, Entity};

use crate::cli::OutputFormat;

/// Result of one `check` run, in rendering-friendly form.
#[derive(Debug, Default, Serialize)]
pub struct CheckSummary {
    /// URLs of stale entities.
    pub stale: Vec<String>,
    /// URLs of open entities without the stale label.
    pub fresh: Vec<String>,
    /// URLs of closed entities.
    pub closed: Vec<String>,
    /// URLs of the comments left this run.
    pub comments: Vec<String>,
}

impl CheckSummary {
    /// Builds a summary from the classified report and any comment
    /// URLs.
    #[must_use]
    pub fn new(report: &AuditReport, comments: Vec<String>) -> Self {
        Self {
            stale: urls(&report.stale),
            fresh: urls(&report.fresh),
            closed: urls(&report.closed),
            comments,
        }
    }

    fn checked(&self) -> usize {
        self.stale.len() + self.fresh.len() + self.closed.len()
    }
}

fn urls(entities: &[Entity]) -> Vec<String> {
    entities.iter().map(|entity| entity.url.clone()).collect()
}

/// Renders a check summary in the selected format.
pub fn render(summary: &CheckSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(summary).context("Failed to serialize to JSON")?;
            println!("{json}");
        }
        OutputFormat::Text => render_text(summary),
    }
    Ok(())
}

fn render_text(summary: &CheckSummary) {
    if summary.stale.is_empty() {
        println!("{}", style("No stale entities found.").green());
    } else {
        println!(
            "{}",
            style(format!("{} stale:", summary.stale.len())).yellow().bold()
        );
        for url in &summary.stale {
            println!("  {url}");
        }
    }

    println!(
        "{}",
        style(format!(
            "{} fresh, {} closed, {} checked",
            summary.fresh.len(),
            summary.closed.len(),
            summary.checked()
        ))
        .dim()
    );

    if !summary.comments.is_empty() {
        println!(
            "{}",
            style(format!("{} comments left:", summary.comments.len()))
                .green()
                .bold()
        );
        for url in &summary.comments {
            println!("  {}", style(url).cyan().underlined());
        }
    }
}
