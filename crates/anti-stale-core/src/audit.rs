// SPDX-License-Identifier: Apache-2.0

//! Decoded batch responses and report aggregation.
//!
//! The lookup response mirrors how the document was built: repository
//! alias to repository block, entity alias to entity. GitHub nulls out
//! aliases it could not resolve instead of dropping them, so every
//! level decodes as an `Option` and the walk tolerates the holes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::github::entity::{Entity, Staleness};

/// Decoded `data` object of a batched lookup.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct LookupData {
    /// Repository alias to repository block. `None` when the
    /// repository was missing or inaccessible.
    pub repositories: BTreeMap<String, Option<RepoEntities>>,
}

/// One decoded repository block.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct RepoEntities {
    /// Entity alias to entity. `None` when the number did not resolve.
    pub entities: BTreeMap<String, Option<Entity>>,
}

/// Decoded `data` object of a batched comment mutation.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct CommentData {
    /// Mutation alias to result. `None` when that mutation failed.
    pub comments: BTreeMap<String, Option<CommentResult>>,
}

impl CommentData {
    /// URLs of the comments that were created, in alias order.
    #[must_use]
    pub fn urls(&self) -> Vec<&str> {
        self.comments
            .values()
            .flatten()
            .map(|result| result.url.as_str())
            .collect()
    }
}

/// One created comment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommentResult {
    /// URL of the new comment.
    pub url: String,
}

/// Entities partitioned by staleness, in alias order.
#[derive(Debug, Default, Serialize)]
pub struct AuditReport {
    /// Open entities carrying the stale label.
    pub stale: Vec<Entity>,
    /// Open entities without the stale label.
    pub fresh: Vec<Entity>,
    /// Closed entities, excluded from commenting.
    pub closed: Vec<Entity>,
}

impl AuditReport {
    /// Classifies every decoded entity against `stale_label`.
    #[must_use]
    pub fn from_lookup(data: LookupData, stale_label: &str) -> Self {
        let mut report = Self::default();

        for (repo_alias, block) in data.repositories {
            let Some(block) = block else {
                debug!(alias = %repo_alias, "repository missing from response");
                continue;
            };
            for (entity_alias, entity) in block.entities {
                let Some(entity) = entity else {
                    debug!(alias = %entity_alias, "entity missing from response");
                    continue;
                };
                match entity.classify(stale_label) {
                    Staleness::Stale => report.stale.push(entity),
                    Staleness::Fresh => report.fresh.push(entity),
                    Staleness::Closed => report.closed.push(entity),
                }
            }
        }

        report
    }

    /// Total number of classified entities.
    #[must_use]
    pub fn total(&self) -> usize {
        self.stale.len() + self.fresh.len() + self.closed.len()
    }

    /// Subject identifiers of the stale entities, in report order, for
    /// the comment batch.
    #[must_use]
    pub fn stale_subject_ids(&self) -> Vec<String> {
        self.stale.iter().map(|entity| entity.id.clone()).collect()
    }
}
