// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bo_billing::{FeeAndCouponProps, FeeBreakdown, FeeCalculator};
use bo_domain_types::Startup;
use tracing::debug;

use crate::error::{Error, Result};
use crate::ledger::StartupLedger;

/// Fee figures for startups looked up by id
pub struct FeeAndCouponService<L> {
    ledger: L,
    calculator: FeeCalculator,
}

impl<L: StartupLedger> FeeAndCouponService<L> {
    pub fn new(ledger: L, calculator: FeeCalculator) -> Self {
        Self { ledger, calculator }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Presentation payload for startup `id`
    pub async fn fee_and_coupon(&self, id: &str) -> Result<FeeAndCouponProps> {
        let startup = self.require(id).await?;
        Ok(self.calculator.calculate(&startup.billing_snapshot()))
    }

    /// Full figures for startup `id`
    pub async fn breakdown(&self, id: &str) -> Result<FeeBreakdown> {
        let startup = self.require(id).await?;
        Ok(self.calculator.breakdown(&startup.billing_snapshot()))
    }

    async fn require(&self, id: &str) -> Result<Startup> {
        debug!(startup = id, "Resolving startup");
        self.ledger
            .startup(id)
            .await?
            .ok_or_else(|| Error::StartupNotFound(id.to_string()))
    }
}
