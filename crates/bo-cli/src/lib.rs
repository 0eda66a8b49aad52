// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::path::PathBuf;

use bo_logging::CliLoggingArgs;
use clap::Subcommand;
use serde_json::Value;

pub use clap::Parser;

pub mod config;
pub mod config_commands;
pub mod fee;
pub mod sessions;

use config::AppConfig;

#[derive(clap::Parser, Debug)]
#[command(
    name = "bo",
    about = "Startup back office: fees, coupons and founder sessions",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Extra configuration file, applied above project config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Override a configuration key, e.g. `--set billing.base-fee=150000`
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    pub set: Vec<String>,
    /// Project root holding `.backoffice/config.toml` (default: current directory)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,
    #[command(flatten)]
    pub logging: CliLoggingArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fee and coupon figures
    Fee {
        #[command(subcommand)]
        subcommand: fee::FeeCommands,
    },
    /// Founder dashboard sessions split into upcoming and past
    Sessions(sessions::SessionsArgs),
    /// Inspect the resolved configuration
    Config {
        #[command(subcommand)]
        subcommand: config_commands::ConfigCommands,
    },
}

impl Cli {
    /// Run the selected command, returning the JSON document to print
    pub async fn run(&self, app: &AppConfig) -> anyhow::Result<Value> {
        match &self.command {
            Commands::Fee { subcommand } => subcommand.run(app).await,
            Commands::Sessions(args) => args.run(app).await,
            Commands::Config { subcommand } => subcommand.run(app),
        }
    }
}
