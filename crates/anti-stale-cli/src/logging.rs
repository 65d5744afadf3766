// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the anti-stale CLI.
//!
//! Uses `tracing` with `tracing-subscriber`. The numeric `--log-level`
//! flag picks the default filter (Debug: 0, Info: 1, Warn: 2,
//! Error: 3); the `RUST_LOG` environment variable overrides it when
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// Logs go to stderr so report output on stdout stays clean.
pub fn init_logging(level: u8) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let default_filter = match level {
        0 => "anti_stale=debug,anti_stale_core=debug,reqwest=error",
        1 => "anti_stale=info,anti_stale_core=info,reqwest=error",
        2 => "anti_stale=warn,anti_stale_core=warn,reqwest=error",
        _ => "anti_stale=error,anti_stale_core=error,reqwest=error",
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
