// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Fee commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use bo_billing::FeeCalculator;
use bo_domain_types::{Amount, BillingSnapshot, Coupon};
use bo_ledger::{FeeAndCouponService, FileLedger};
use clap::Subcommand;
use serde_json::Value;
use tracing::info;

use crate::config::AppConfig;

#[derive(Subcommand, Debug, Clone)]
pub enum FeeCommands {
    /// Fee and coupon figures for a startup in the ledger
    Show {
        /// Startup id
        startup: String,
        /// Ledger file (default: `ledger.path` from config)
        #[arg(long)]
        ledger: Option<PathBuf>,
    },
    /// Fee and coupon figures for an ad-hoc startup
    Quote(QuoteArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Billing founder count
    #[arg(long)]
    pub founders: u32,
    /// Total of payments already received
    #[arg(long, default_value_t = 0)]
    pub paid: Amount,
    /// Applied coupon code
    #[arg(long, requires = "discount")]
    pub coupon_code: Option<String>,
    /// Coupon discount percentage
    #[arg(long, requires = "coupon_code", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub discount: Option<u8>,
    /// Coupon instructions
    #[arg(long, requires = "coupon_code")]
    pub instructions: Option<String>,
}

impl QuoteArgs {
    pub fn snapshot(&self) -> BillingSnapshot {
        let snapshot = BillingSnapshot::new(self.founders).with_paid_fee(self.paid);
        match (&self.coupon_code, self.discount) {
            (Some(code), Some(discount)) => {
                let mut coupon = Coupon::new(code.clone(), discount);
                coupon.instructions = self.instructions.clone();
                snapshot.with_coupon(coupon)
            }
            _ => snapshot,
        }
    }
}

impl FeeCommands {
    pub async fn run(&self, app: &AppConfig) -> Result<Value> {
        let calculator = FeeCalculator::new(app.fee_schedule()?);

        let props = match self {
            FeeCommands::Show { startup, ledger } => {
                let path = ledger
                    .clone()
                    .or_else(|| app.ledger.path.clone())
                    .context("no ledger file: pass --ledger or set ledger.path")?;
                info!(path = %path.display(), startup = %startup, "Looking up startup fee");

                let ledger = FileLedger::load(&path)
                    .await
                    .with_context(|| format!("loading ledger {}", path.display()))?;
                FeeAndCouponService::new(ledger, calculator).fee_and_coupon(startup).await?
            }
            FeeCommands::Quote(args) => calculator.calculate(&args.snapshot()),
        };

        Ok(serde_json::to_value(props)?)
    }
}
