// SPDX-License-Identifier: Apache-2.0

//! Configuration management for anti-stale.
//!
//! The config file is JSON and names the user agent, the GitHub token,
//! and the owner/repository selector to audit:
//!
//! ```json
//! {
//!   "userAgent": "anti-stale",
//!   "token": "ghp_...",
//!   "owners": {
//!     "acme": {
//!       "widgets": { "issues": [1, 2], "prs": [7] }
//!     }
//!   }
//! }
//! ```
//!
//! Environment variables layer on top of the file with the `ANTISTALE`
//! prefix, so the token can stay out of the file entirely:
//! `ANTISTALE_TOKEN=ghp_... anti-stale check`.

use std::collections::BTreeMap;
use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::Result;
use crate::error::AntiStaleError;

/// File name looked up in the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "anti-stale.json";

/// Issue and pull request numbers to audit within one repository.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepoTargets {
    /// Issue numbers.
    pub issues: Vec<u64>,
    /// Pull request numbers.
    pub prs: Vec<u64>,
}

impl RepoTargets {
    /// Whether this repository names any entity at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.prs.is_empty()
    }
}

/// Owner name to repository name to targets.
///
/// `BTreeMap` keeps iteration order deterministic, so the same selector
/// always builds the same GraphQL document.
pub type Owners = BTreeMap<String, BTreeMap<String, RepoTargets>>;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// User agent sent with every GraphQL request.
    pub user_agent: String,
    /// GitHub token used as the bearer credential.
    pub token: SecretString,
    /// Repositories and entity numbers to audit.
    #[serde(default)]
    pub owners: Owners,
}

impl AppConfig {
    /// Checks the loaded values before anything touches the network.
    fn validate(&self) -> Result<()> {
        if self.user_agent.is_empty() {
            return Err(AntiStaleError::MissingUserAgent);
        }
        if self.token.expose_secret().is_empty() {
            return Err(AntiStaleError::MissingToken);
        }
        Ok(())
    }

    /// Number of entities named by the selector.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.owners
            .values()
            .flat_map(BTreeMap::values)
            .map(|targets| targets.issues.len() + targets.prs.len())
            .sum()
    }
}

/// Load configuration from `path` plus environment overrides.
///
/// Environment variables use the `ANTISTALE` prefix; `ANTISTALE_TOKEN`
/// overrides the `token` key from the file.
///
/// # Errors
///
/// Returns [`AntiStaleError::Config`] when the file is missing or
/// malformed, and the dedicated variants when the user agent or token
/// resolves to an empty string.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Json))
        .add_source(environment_source())
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;

    Ok(app_config)
}

/// Environment layer over the file: `ANTISTALE_TOKEN` overrides `token`,
/// while `__` separates nested keys.
///
/// The prefix separator must stay an explicit `_`; without it the nested
/// `__` separator doubles as the prefix separator and only
/// `ANTISTALE__TOKEN` would match.
fn environment_source() -> Environment {
    Environment::with_prefix("ANTISTALE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<AppConfig> {
        let config = Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    #[test]
    fn parses_full_config() {
        let app = parse(
            r#"{
                "userAgent": "anti-stale tests",
                "token": "ghp_test",
                "owners": {
                    "acme": {
                        "widgets": { "issues": [1, 2], "prs": [7] },
                        "gears": { "prs": [3] }
                    }
                }
            }"#,
        )
        .expect("config should parse");

        assert_eq!(app.user_agent, "anti-stale tests");
        assert_eq!(app.token.expose_secret(), "ghp_test");
        let repos = &app.owners["acme"];
        assert_eq!(repos["widgets"].issues, vec![1, 2]);
        assert_eq!(repos["widgets"].prs, vec![7]);
        assert!(repos["gears"].issues.is_empty());
        assert_eq!(app.target_count(), 4);
    }

    #[test]
    fn missing_owners_defaults_to_empty() {
        let app = parse(r#"{"userAgent": "ua", "token": "t"}"#).expect("config should parse");
        assert!(app.owners.is_empty());
        assert_eq!(app.target_count(), 0);
    }

    #[test]
    fn missing_entity_lists_default_to_empty() {
        let app = parse(
            r#"{
                "userAgent": "ua",
                "token": "t",
                "owners": { "acme": { "widgets": {} } }
            }"#,
        )
        .expect("config should parse");

        assert!(app.owners["acme"]["widgets"].is_empty());
        assert_eq!(app.target_count(), 0);
    }

    #[test]
    fn empty_user_agent_rejected() {
        let err = parse(r#"{"userAgent": "", "token": "t"}"#).unwrap_err();
        assert!(matches!(err, AntiStaleError::MissingUserAgent));
    }

    #[test]
    fn empty_token_rejected() {
        let err = parse(r#"{"userAgent": "ua", "token": ""}"#).unwrap_err();
        assert!(matches!(err, AntiStaleError::MissingToken));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_config(Path::new("/nonexistent/anti-stale.json")).unwrap_err();
        assert!(matches!(err, AntiStaleError::Config { .. }));
    }

    #[test]
    fn load_config_reads_json_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("anti-stale.json");
        std::fs::write(
            &path,
            r#"{"userAgent": "ua", "token": "t", "owners": {}}"#,
        )
        .expect("write config");

        let app = load_config(&path).expect("config should load");
        assert_eq!(app.user_agent, "ua");
        assert!(app.owners.is_empty());
    }

    #[test]
    fn env_token_overrides_file_token() {
        let env = config::Map::from([("ANTISTALE_TOKEN".to_owned(), "ghp_from_env".to_owned())]);
        let config = Config::builder()
            .add_source(File::from_str(
                r#"{"userAgent": "ua", "token": "ghp_from_file"}"#,
                FileFormat::Json,
            ))
            .add_source(environment_source().source(Some(env)))
            .build()
            .expect("layered config should build");

        let app: AppConfig = config.try_deserialize().expect("config should deserialize");
        assert_eq!(app.token.expose_secret(), "ghp_from_env");
        assert_eq!(app.user_agent, "ua");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("anti-stale.json");
        std::fs::write(&path, "{ not json").expect("write config");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, AntiStaleError::Config { .. }));
    }
}
