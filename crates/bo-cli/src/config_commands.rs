// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Configuration inspection commands

use anyhow::Result;
use clap::Subcommand;
use serde_json::{json, Value};

use crate::config::AppConfig;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show {
        /// Also report the scope each value came from
        #[arg(long)]
        origin: bool,
    },
}

impl ConfigCommands {
    pub fn run(&self, app: &AppConfig) -> Result<Value> {
        match self {
            ConfigCommands::Show { origin: false } => Ok(app.resolved.json.clone()),
            ConfigCommands::Show { origin: true } => Ok(json!({
                "config": app.resolved.json,
                "origin": app.resolved.provenance.winner,
                "enforced": app.resolved.provenance.enforced,
            })),
        }
    }
}
