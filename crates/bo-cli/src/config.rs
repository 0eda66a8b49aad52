// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Resolved configuration for one CLI invocation

use anyhow::{Context, Result};
use bo_billing::FeeSchedule;
use bo_config_types::{billing::BillingSection, ledger::LedgerSection, ui::UiRoot};
use config_core::{extract, load_all, paths, Resolved};

use crate::Cli;

/// Typed sections pulled out of the merged configuration
#[derive(Debug)]
pub struct AppConfig {
    pub resolved: Resolved,
    pub ui: UiRoot,
    pub billing: BillingSection,
    pub ledger: LedgerSection,
}

impl AppConfig {
    /// Load every layer for `cli`: files, `BO_*` environment, `--config`, `--set`
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let flags = cli
            .set
            .iter()
            .map(|arg| config_core::env::parse_flag(arg))
            .collect::<Result<Vec<_>>>()?;
        let flag_refs: Vec<(&str, &str)> =
            flags.iter().map(|(key, value)| (key.as_str(), value.as_str())).collect();

        let project_root = match &cli.project {
            Some(root) => Some(root.clone()),
            None => std::env::current_dir().ok(),
        };
        let paths = paths::discover_paths(project_root.as_deref()).with_cli_config(cli.config.clone());

        let resolved = load_all(&paths, &flag_refs).context("loading configuration")?;
        Self::from_resolved(resolved)
    }

    pub fn from_resolved(resolved: Resolved) -> Result<Self> {
        let ui: UiRoot = extract::get(&resolved.json)?;
        let billing: BillingSection = extract::get_at_or_default(&resolved.json, "billing")?;
        let ledger: LedgerSection = extract::get_at_or_default(&resolved.json, "ledger")?;
        Ok(Self {
            resolved,
            ui,
            billing,
            ledger,
        })
    }

    pub fn fee_schedule(&self) -> Result<FeeSchedule> {
        FeeSchedule::from_config(&self.billing).context("invalid [billing] configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_core::Provenance;

    fn app(json: serde_json::Value) -> AppConfig {
        AppConfig::from_resolved(Resolved {
            json,
            provenance: Provenance::default(),
        })
        .unwrap()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let app = app(serde_json::json!({}));
        assert_eq!(app.fee_schedule().unwrap(), FeeSchedule::default());
        assert!(app.ledger.path.is_none());
        assert!(app.ui.log_level.is_none());
    }

    #[test]
    fn test_sections_are_extracted() {
        let app = app(serde_json::json!({
            "log-level": "debug",
            "billing": { "base-fee": 80000 },
            "ledger": { "path": "/srv/ledger.toml" }
        }));
        assert_eq!(app.fee_schedule().unwrap().base_fee(), 80_000);
        assert_eq!(app.fee_schedule().unwrap().emi_installments(), 6);
        assert_eq!(app.ledger.path.as_deref(), Some(std::path::Path::new("/srv/ledger.toml")));
        assert_eq!(app.ui.log_level, Some(bo_config_types::ui::LogLevel::Debug));
    }

    #[test]
    fn test_invalid_schedule_is_reported() {
        let app = app(serde_json::json!({ "billing": { "emi-installments": 0 } }));
        assert!(app.fee_schedule().is_err());
    }
}
