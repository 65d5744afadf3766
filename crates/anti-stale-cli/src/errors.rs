// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to [`AntiStaleError`] and appends
//! actionable hints. Structured error data stays in the core library;
//! presentation stays here.

use anti_stale_core::{AntiStaleError, DEFAULT_CONFIG_FILE};
use anyhow::Error;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not an [`AntiStaleError`], returns the original
/// error message unchanged.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<AntiStaleError>() else {
        return error.to_string();
    };

    match err {
        AntiStaleError::Config { .. } => {
            format!(
                "{err}\n\nTip: Pass --config <path> or create {DEFAULT_CONFIG_FILE} in the working directory."
            )
        }
        AntiStaleError::MissingUserAgent => {
            format!("{err}\n\nTip: Set \"userAgent\" in the config file.")
        }
        AntiStaleError::MissingToken => {
            format!("{err}\n\nTip: Set \"token\" in the config file or export ANTISTALE_TOKEN.")
        }
        AntiStaleError::Status { status } if status.as_u16() == 401 => {
            format!("{err}\n\nTip: GitHub rejected the token. Check that it is valid and has repo scope.")
        }
        AntiStaleError::Network(_) => {
            format!("{err}\n\nTip: Check your internet connection and try again.")
        }
        AntiStaleError::Graphql(_) => {
            format!("{err}\n\nTip: Check that the configured owners, repositories, and numbers exist.")
        }
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anti_stale_core::StatusCode;

    #[test]
    fn formats_config_error_with_hint() {
        let err = anyhow::Error::new(AntiStaleError::Config {
            message: "configuration file \"anti-stale.json\" not found".to_string(),
        });
        let formatted = format_error(&err);

        assert!(formatted.contains("Configuration error"));
        assert!(formatted.contains("--config"));
    }

    #[test]
    fn missing_token_hint_names_the_env_var() {
        let err = anyhow::Error::new(AntiStaleError::MissingToken);
        let formatted = format_error(&err);

        assert!(formatted.contains("ANTISTALE_TOKEN"));
    }

    #[test]
    fn unauthorized_status_names_the_token() {
        let err = anyhow::Error::new(AntiStaleError::Status {
            status: StatusCode::UNAUTHORIZED,
        });
        let formatted = format_error(&err);

        assert!(formatted.contains("401"));
        assert!(formatted.contains("token"));
    }

    #[test]
    fn other_statuses_pass_through_without_hint() {
        let err = anyhow::Error::new(AntiStaleError::Status {
            status: StatusCode::BAD_GATEWAY,
        });

        assert_eq!(format_error(&err), "Unexpected status code: 502 Bad Gateway");
    }

    #[test]
    fn non_library_errors_pass_through() {
        let err = anyhow::anyhow!("some generic failure");

        assert_eq!(format_error(&err), "some generic failure");
    }
}
