// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only
#![allow(clippy::disallowed_methods)] // the command result goes to stdout

use anyhow::Result;
use bo_cli::config::AppConfig;
use bo_cli::{Cli, Parser};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let app = AppConfig::resolve(&cli)?;
    cli.logging.clone().with_config_defaults(&app.ui).init("bo-cli")?;

    let output = cli.run(&app).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
