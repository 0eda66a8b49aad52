// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Record source locations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The `[ledger]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LedgerSection {
    /// TOML file holding startups, payments and the coupon catalog
    pub path: Option<PathBuf>,
    /// JSON file holding the founder dashboard sessions
    pub sessions_path: Option<PathBuf>,
}
