// SPDX-License-Identifier: Apache-2.0

//! anti-stale - check and find stale issues or pull requests and send
//! a comment to un-stale them.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    if let Err(e) = commands::run(cli).await {
        let formatted = errors::format_error(&e);
        eprintln!("Error: {formatted}");
        std::process::exit(1);
    }

    Ok(())
}
