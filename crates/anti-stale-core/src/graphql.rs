// SPDX-License-Identifier: Apache-2.0

//! Generic GraphQL transport.
//!
//! Sends one GraphQL document with its variables to a fixed endpoint
//! and decodes a generically typed response envelope. Provider-level
//! errors are part of the envelope, not a transport failure: callers
//! get whatever `data` decoded alongside the `errors` array and decide
//! fatality themselves.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::Result;
use crate::error::AntiStaleError;

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How long pooled connections may sit idle before being dropped.
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Wire shape of one GraphQL request.
#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}

/// One provider-reported error from a GraphQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Human-readable message.
    pub message: String,
    /// Provider error kind (`type` on the wire), e.g. `NOT_FOUND`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Document positions the error refers to.
    #[serde(default)]
    pub locations: Vec<GraphQlErrorLocation>,
    /// Response path the error refers to, usually alias tokens.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
    /// Provider-specific extension fields.
    #[serde(default)]
    pub extensions: BTreeMap<String, serde_json::Value>,
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{kind}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// A position in the query document.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GraphQlErrorLocation {
    /// 1-based line.
    pub line: u64,
    /// 1-based column.
    pub column: u64,
}

/// Provider errors collected from one response, displayed joined.
#[derive(Debug, Default)]
pub struct GraphQlErrors(pub Vec<GraphQlError>);

impl fmt::Display for GraphQlErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Generic response envelope.
///
/// A non-empty `errors` array does not imply `data` is absent: GitHub
/// nulls out the aliases it could not resolve, reports one error per
/// alias, and the rest of the data decodes normally. Both halves are
/// surfaced so callers can keep partial results.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<R> {
    /// Decoded `data` object, absent when the whole request failed.
    pub data: Option<R>,
    /// Provider-reported errors, empty on a clean response.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// GraphQL transport bound to one endpoint.
///
/// The pooled HTTP client is built once at construction and reused for
/// every call.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    endpoint: String,
    http: Client,
}

impl GraphQlClient {
    /// Creates a transport for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`AntiStaleError::EmptyEndpoint`] when `endpoint` is
    /// empty, or [`AntiStaleError::Network`] when the HTTP client
    /// cannot be built.
    pub fn new(endpoint: &str) -> Result<Self> {
        if endpoint.is_empty() {
            return Err(AntiStaleError::EmptyEndpoint);
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .build()?;

        Ok(Self {
            endpoint: endpoint.to_owned(),
            http,
        })
    }

    /// Sends one GraphQL document and decodes the response envelope.
    ///
    /// Headers are applied verbatim; the caller supplies
    /// authentication. Provider-level errors do not fail the call, the
    /// returned envelope carries them next to whatever `data` decoded.
    ///
    /// # Errors
    ///
    /// Returns [`AntiStaleError::EmptyQuery`] before any I/O when
    /// `query` is empty, [`AntiStaleError::Status`] for a non-success
    /// HTTP status (before any decode attempt),
    /// [`AntiStaleError::Network`] for connection-level failures, and
    /// [`AntiStaleError::Decode`] when the body is not a GraphQL
    /// envelope.
    #[instrument(skip(self, query, variables, headers), fields(query_length = query.len()))]
    pub async fn send<R, V>(
        &self,
        query: &str,
        variables: &V,
        headers: HeaderMap,
    ) -> Result<GraphQlResponse<R>>
    where
        R: DeserializeOwned,
        V: Serialize,
    {
        if query.is_empty() {
            return Err(AntiStaleError::EmptyQuery);
        }

        let response = self
            .http
            .post(&self.endpoint)
            .headers(headers)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AntiStaleError::Status { status });
        }

        // Read the body fully first so decode failures stay a distinct
        // kind from network failures.
        let body = response.text().await?;
        let envelope: GraphQlResponse<R> =
            serde_json::from_str(&body).map_err(AntiStaleError::Decode)?;

        if envelope.errors.is_empty() {
            debug!("GraphQL response decoded cleanly");
        } else {
            warn!(
                errors = envelope.errors.len(),
                "GraphQL response contains errors"
            );
        }

        Ok(envelope)
    }
}
