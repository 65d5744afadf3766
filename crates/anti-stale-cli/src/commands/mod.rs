// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the anti-stale CLI.

pub mod check;
pub mod completion;

use anyhow::Result;

use crate::cli::{Cli, Commands};

/// Dispatch to the appropriate command handler.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        output,
        command,
        ..
    } = cli;

    match command {
        Commands::Check {
            reply,
            interactive,
            msg,
            label,
        } => {
            let opts = check::CheckOpts {
                reply,
                interactive,
                msg,
                label,
            };
            check::run(&config, output, opts).await
        }
        Commands::Completion { shell } => completion::run(shell),
    }
}
