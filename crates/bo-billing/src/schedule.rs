// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bo_config_types::billing::{BillingSection, DEFAULT_BASE_FEE, DEFAULT_EMI_INSTALLMENTS};
use serde::Serialize;

use crate::error::{BillingError, Result};

/// Parameters injected into the fee calculator
///
/// Only constructible through [`FeeSchedule::new`], [`FeeSchedule::from_config`]
/// or `Default`, so the base fee is always positive and there is at least one
/// installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeeSchedule {
    /// Fee owed per billing founder
    base_fee: i64,
    /// Number of equal monthly installments
    emi_installments: u32,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            base_fee: DEFAULT_BASE_FEE,
            emi_installments: DEFAULT_EMI_INSTALLMENTS,
        }
    }
}

impl FeeSchedule {
    pub fn new(base_fee: i64, emi_installments: u32) -> Result<Self> {
        if base_fee <= 0 {
            return Err(BillingError::NonPositiveBaseFee(base_fee));
        }
        if emi_installments == 0 {
            return Err(BillingError::ZeroInstallments);
        }
        Ok(Self {
            base_fee,
            emi_installments,
        })
    }

    pub fn base_fee(&self) -> i64 {
        self.base_fee
    }

    pub fn emi_installments(&self) -> u32 {
        self.emi_installments
    }

    /// Build the schedule from the `[billing]` config section, unset keys
    /// falling back to the defaults
    pub fn from_config(section: &BillingSection) -> Result<Self> {
        Self::new(section.base_fee(), section.emi_installments())
    }
}
