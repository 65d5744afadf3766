// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for anti-stale.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use anti_stale_core::DEFAULT_CONFIG_FILE;

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
}

/// Check and find stale issues or pull requests and send a comment to
/// un-stale them.
#[derive(Parser)]
#[command(name = "anti-stale")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, short = 'c', global = true, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Log level (Debug: 0, Info: 1, Warn: 2, Error: 3)
    #[arg(long, global = true, value_name = "LEVEL", default_value_t = 1,
          value_parser = clap::value_parser!(u8).range(0..=3))]
    pub log_level: u8,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Find stale issues and pull requests, optionally reply to them
    Check {
        /// Reply to every stale issue/pr with the configured message
        #[arg(long)]
        reply: bool,

        /// Confirm each reply individually before sending
        #[arg(long, short = 'i')]
        interactive: bool,

        /// Message to reply with
        #[arg(long, value_name = "TEXT", default_value = "not stale")]
        msg: String,

        /// Label name that marks an entity as stale
        #[arg(long, short = 'l', value_name = "NAME", default_value = "Stale")]
        label: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
