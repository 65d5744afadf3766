// SPDX-License-Identifier: Apache-2.0

//! Error types for anti-stale operations.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

use crate::graphql::GraphQlErrors;

/// Errors that can occur during an audit run.
///
/// Transport failures keep their causes distinct: a non-success HTTP
/// status ([`Status`](AntiStaleError::Status)), a connection-level
/// failure ([`Network`](AntiStaleError::Network)), and an undecodable
/// body ([`Decode`](AntiStaleError::Decode)) are three different
/// variants. Provider-reported errors inside a decoded envelope are not
/// transport failures at all; they only become
/// [`Graphql`](AntiStaleError::Graphql) when the response carried no
/// data to continue with.
#[derive(Error, Debug)]
pub enum AntiStaleError {
    /// Configuration file could not be read or deserialized.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong.
        message: String,
    },

    /// The configured user agent is empty.
    #[error("User agent is empty in configuration")]
    MissingUserAgent,

    /// The configured GitHub token is empty.
    #[error("GitHub token is empty in configuration")]
    MissingToken,

    /// The GraphQL endpoint URL is empty.
    #[error("GraphQL endpoint URL is empty")]
    EmptyEndpoint,

    /// An empty GraphQL document was about to be sent.
    #[error("GraphQL query is empty")]
    EmptyQuery,

    /// The endpoint answered with a non-success HTTP status.
    #[error("Unexpected status code: {status}")]
    Status {
        /// Status line reported by the endpoint, e.g. `403 Forbidden`.
        status: reqwest::StatusCode,
    },

    /// Connection-level HTTP failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not decode as a GraphQL envelope.
    #[error("Invalid GraphQL response body")]
    Decode(#[source] serde_json::Error),

    /// The response carried provider errors and no usable data.
    #[error("GraphQL response contains errors: {0}")]
    Graphql(GraphQlErrors),
}

impl From<config::ConfigError> for AntiStaleError {
    fn from(err: config::ConfigError) -> Self {
        AntiStaleError::Config {
            message: err.to_string(),
        }
    }
}
