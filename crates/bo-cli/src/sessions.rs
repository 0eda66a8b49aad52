// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::path::PathBuf;

use anyhow::{Context, Result};
use bo_dashboard::{load_sessions, SessionBoard};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::AppConfig;

#[derive(clap::Args, Debug, Clone)]
pub struct SessionsArgs {
    /// Sessions JSON file (default: `ledger.sessions-path` from config)
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Only sessions carrying this tag; repeat to require several
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
    /// Reference time in RFC 3339 (default: now)
    #[arg(long, value_parser = parse_rfc3339)]
    pub now: Option<DateTime<Utc>>,
}

impl SessionsArgs {
    pub async fn run(&self, app: &AppConfig) -> Result<Value> {
        let path = self
            .file
            .clone()
            .or_else(|| app.ledger.sessions_path.clone())
            .context("no sessions file: pass --file or set ledger.sessions-path")?;

        let board = SessionBoard::new(load_sessions(&path).await?);
        let now = self.now.unwrap_or_else(Utc::now);
        Ok(serde_json::to_value(board.partition(self.tags.as_slice(), now))?)
    }
}

fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", value, e))
}
