// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # anti-stale core
//!
//! Core library for the anti-stale CLI - batched auditing of GitHub
//! issues and pull requests for a configurable "stale" label.
//!
//! This crate provides reusable components for:
//! - Batched GraphQL document construction (one query for any number of
//!   owner/repository/entity targets, collision-free aliases)
//! - A generic GraphQL transport with a typed response envelope
//! - Staleness classification and report aggregation
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use anti_stale_core::{AuditReport, GITHUB_GRAPHQL_URL, GitHubClient, load_config};
//!
//! # async fn example() -> anti_stale_core::Result<()> {
//! // Load configuration
//! let config = load_config(Path::new("anti-stale.json"))?;
//!
//! // Create the client (reused for lookup and comment calls)
//! let client = GitHubClient::new(GITHUB_GRAPHQL_URL, &config.user_agent, &config.token)?;
//!
//! // One batched lookup for every configured entity
//! let envelope = client.fetch_entities(&config.owners).await?;
//!
//! // Classify what came back
//! let report = AuditReport::from_lookup(envelope.data.unwrap_or_default(), "Stale");
//! println!("{} stale, {} checked", report.stale.len(), report.total());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`audit`] - Decoded batch responses and report aggregation
//! - [`config`] - Configuration loading and the audit selector
//! - [`error`] - Error types
//! - [`github`] - GitHub client, entity model, document builders
//! - [`graphql`] - Generic GraphQL transport

// ============================================================================
// Error Handling
// ============================================================================

pub use error::AntiStaleError;

/// Convenience Result type for anti-stale operations.
///
/// This is equivalent to `std::result::Result<T, AntiStaleError>`.
pub type Result<T> = std::result::Result<T, AntiStaleError>;

/// Re-export of the HTTP status type carried by [`AntiStaleError::Status`].
pub use reqwest::StatusCode;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, DEFAULT_CONFIG_FILE, Owners, RepoTargets, load_config};

// ============================================================================
// GraphQL Transport
// ============================================================================

pub use graphql::{GraphQlClient, GraphQlError, GraphQlErrors, GraphQlResponse};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::entity::{AddCommentInput, Entity, LabelNode, Labels, Staleness};
pub use github::query::{LABEL_PAGE_SIZE, VariableValue, comment_mutation, lookup_query};
pub use github::{GITHUB_GRAPHQL_URL, GitHubClient};

// ============================================================================
// Audit Aggregation
// ============================================================================

pub use audit::{AuditReport, CommentData, CommentResult, LookupData, RepoEntities};

// ============================================================================
// Modules
// ============================================================================

pub mod audit;
pub mod config;
pub mod error;
pub mod github;
pub mod graphql;
