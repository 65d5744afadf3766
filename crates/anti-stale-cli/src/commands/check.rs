// SPDX-License-Identifier: Apache-2.0

//! The `check` command: find stale entities and optionally reply.
//!
//! One batched lookup fetches every configured issue and pull request,
//! classification partitions them, and in reply mode one batched
//! mutation comments on the (optionally confirmed) stale ones. Two
//! HTTP calls at most per run.

use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Confirm;
use tracing::{debug, error, info, warn};

use anti_stale_core::{
    AntiStaleError, AuditReport, Entity, GITHUB_GRAPHQL_URL, GitHubClient, GraphQlError,
    GraphQlErrors, load_config,
};

use crate::cli::OutputFormat;
use crate::output::{self, CheckSummary};

/// Options for one `check` run.
#[derive(Debug, Clone)]
pub struct CheckOpts {
    /// Post a reply to every stale entity.
    pub reply: bool,
    /// Ask per stale entity before replying.
    pub interactive: bool,
    /// Reply body.
    pub msg: String,
    /// Label that marks an entity as stale.
    pub label: String,
}

/// Runs the audit: fetch, classify, optionally confirm and comment.
pub async fn run(config_path: &Path, format: OutputFormat, opts: CheckOpts) -> Result<()> {
    let config = load_config(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    debug!(targets = config.target_count(), "configuration loaded");

    if config.target_count() == 0 {
        warn!("no issues or pull requests configured, nothing to check");
        return output::render(&CheckSummary::default(), format);
    }

    let client = GitHubClient::new(GITHUB_GRAPHQL_URL, &config.user_agent, &config.token)?;

    let envelope = client.fetch_entities(&config.owners).await?;
    let data = surface_provider_errors(envelope.data, envelope.errors)?;
    let report = AuditReport::from_lookup(data, &opts.label);

    for entity in report.stale.iter().chain(&report.fresh).chain(&report.closed) {
        let labels: Vec<&str> = entity
            .labels
            .nodes
            .iter()
            .map(|label| label.name.as_str())
            .collect();
        debug!(labels = ?labels, closed = entity.closed, "checked {}", entity.url);
    }
    for entity in &report.closed {
        info!("{} is not open, skipping", entity.url);
    }
    for entity in &report.fresh {
        info!("{} is not stale", entity.url);
    }
    for entity in &report.stale {
        info!("{} is stale", entity.url);
    }

    let targets = select_targets(&report.stale, &opts)?;

    let mut comment_urls = Vec::new();
    if opts.reply && !targets.is_empty() {
        let envelope = client.comment_on(&targets, &opts.msg).await?;
        let data = surface_provider_errors(envelope.data, envelope.errors)?;
        for url in data.urls() {
            info!("left comment successfully: {url}");
        }
        comment_urls = data.urls().into_iter().map(str::to_owned).collect();
    }

    output::render(&CheckSummary::new(&report, comment_urls), format)
}

/// Logs provider errors and fails only when no data came back with
/// them.
fn surface_provider_errors<T>(data: Option<T>, errors: Vec<GraphQlError>) -> Result<T> {
    for err in &errors {
        error!("GraphQL response contains errors: {err}");
    }
    match data {
        Some(data) => Ok(data),
        None => Err(AntiStaleError::Graphql(GraphQlErrors(errors)).into()),
    }
}

/// Applies reply gating to the stale list.
///
/// In interactive mode each stale entity gets a yes/no prompt and
/// declining drops it from the batch. Outside reply mode the batch is
/// always empty.
fn select_targets(stale: &[Entity], opts: &CheckOpts) -> Result<Vec<String>> {
    if !opts.reply {
        return Ok(Vec::new());
    }

    let mut targets = Vec::with_capacity(stale.len());
    for entity in stale {
        if opts.interactive {
            let confirmed = Confirm::new()
                .with_prompt(format!("Do I reply to this issue/pr? ({})", entity.url))
                .default(true)
                .interact()
                .context("Failed to read confirmation")?;
            if !confirmed {
                debug!("{} skipped by user", entity.url);
                continue;
            }
        }
        targets.push(entity.id.clone());
    }

    Ok(targets)
}
