// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Billing read contract
//!
//! [`BillingSnapshot`] is the explicit, read-only view of a startup that fee
//! computation works from. It is detached from whatever store produced it.

use serde::{Deserialize, Serialize};

use crate::coupon::Coupon;

/// Monetary amount in whole currency units
///
/// Signed, because a remaining balance goes negative when a startup overpays.
pub type Amount = i64;

/// Everything the fee calculation needs to know about one startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BillingSnapshot {
    /// Founders sharing the fee liability
    pub billing_founders_count: u32,
    /// Sum of payments in the `paid` state
    pub paid_fee: Amount,
    pub applied_coupon: Option<Coupon>,
}

impl BillingSnapshot {
    pub fn new(billing_founders_count: u32) -> Self {
        Self {
            billing_founders_count,
            paid_fee: 0,
            applied_coupon: None,
        }
    }

    pub fn with_paid_fee(mut self, paid_fee: Amount) -> Self {
        self.paid_fee = paid_fee;
        self
    }

    pub fn with_coupon(mut self, coupon: Coupon) -> Self {
        self.applied_coupon = Some(coupon);
        self
    }
}
