// SPDX-License-Identifier: Apache-2.0

//! GitHub GraphQL API integration.
//!
//! [`GitHubClient`] pairs the document builders with the transport and
//! owns the request headers. A batch lookup and a batch comment each
//! cost one HTTP call, however many entities they touch.

pub mod entity;
pub mod query;

use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::Result;
use crate::audit::{CommentData, LookupData};
use crate::config::Owners;
use crate::error::AntiStaleError;
use crate::graphql::{GraphQlClient, GraphQlResponse};

/// GitHub's GraphQL endpoint.
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// GitHub client for batched entity lookups and comment mutations.
#[derive(Debug)]
pub struct GitHubClient {
    transport: GraphQlClient,
    headers: HeaderMap,
}

impl GitHubClient {
    /// Creates a client for `endpoint`, authenticating with `token`.
    ///
    /// Headers are built once here and sent with every call:
    /// `Authorization`, `User-Agent`, `Content-Type` and GitHub's
    /// `Accept` media type.
    ///
    /// # Errors
    ///
    /// Returns [`AntiStaleError::MissingUserAgent`] or
    /// [`AntiStaleError::MissingToken`] when either value is empty,
    /// [`AntiStaleError::EmptyEndpoint`] for a blank endpoint, and
    /// [`AntiStaleError::Config`] when a value cannot form a valid
    /// header.
    pub fn new(endpoint: &str, user_agent: &str, token: &SecretString) -> Result<Self> {
        if user_agent.is_empty() {
            return Err(AntiStaleError::MissingUserAgent);
        }
        if token.expose_secret().is_empty() {
            return Err(AntiStaleError::MissingToken);
        }

        Ok(Self {
            transport: GraphQlClient::new(endpoint)?,
            headers: build_headers(user_agent, token)?,
        })
    }

    /// Fetches every entity named by the selector in one batched query.
    ///
    /// The returned envelope may carry provider errors next to partial
    /// data; the caller decides whether that is fatal.
    #[instrument(skip(self, owners), fields(owner_count = owners.len()))]
    pub async fn fetch_entities(&self, owners: &Owners) -> Result<GraphQlResponse<LookupData>> {
        let (document, variables) = query::lookup_query(owners);
        debug!(query = %document, "built lookup query");
        debug!(variables = ?variables, "lookup variables");

        self.transport
            .send(&document, &variables, self.headers.clone())
            .await
    }

    /// Adds `body` as a comment on every subject in one batched
    /// mutation.
    #[instrument(skip(self, subject_ids, body), fields(target_count = subject_ids.len()))]
    pub async fn comment_on(
        &self,
        subject_ids: &[String],
        body: &str,
    ) -> Result<GraphQlResponse<CommentData>> {
        let (document, variables) = query::comment_mutation(subject_ids, body);
        debug!(query = %document, "built comment mutation");
        debug!(variables = ?variables, "mutation variables");

        self.transport
            .send(&document, &variables, self.headers.clone())
            .await
    }
}

/// Request headers sent with every call.
fn build_headers(user_agent: &str, token: &SecretString) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|_| AntiStaleError::Config {
            message: "token contains characters not allowed in an Authorization header"
                .to_string(),
        })?;
    auth.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth);

    let agent = HeaderValue::from_str(user_agent).map_err(|_| AntiStaleError::Config {
        message: "user agent contains characters not allowed in a User-Agent header".to_string(),
    })?;
    headers.insert(header::USER_AGENT, agent);

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );

    Ok(headers)
}
