// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Startup records

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::billing::{Amount, BillingSnapshot};
use crate::coupon::Coupon;
use crate::payment::Payment;

/// A startup enrolled in the accelerator, with its billing history loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "kebab-case")]
pub struct Startup {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Founders sharing the fee liability
    #[validate(range(min = 1))]
    pub billing_founders_count: u32,
    #[serde(default)]
    #[validate(nested)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    #[validate(nested)]
    pub applied_coupon: Option<Coupon>,
}

impl Startup {
    pub fn new(id: impl Into<String>, billing_founders_count: u32) -> Self {
        Self {
            id: id.into(),
            name: None,
            billing_founders_count,
            payments: Vec::new(),
            applied_coupon: None,
        }
    }

    /// Total of all payments in the `paid` state
    pub fn paid_fee(&self) -> Amount {
        self.payments
            .iter()
            .filter(|payment| payment.is_paid())
            .fold(0, |total: Amount, payment| total.saturating_add(payment.amount))
    }

    /// Detach the figures fee computation needs from this record
    pub fn billing_snapshot(&self) -> BillingSnapshot {
        BillingSnapshot {
            billing_founders_count: self.billing_founders_count,
            paid_fee: self.paid_fee(),
            applied_coupon: self.applied_coupon.clone(),
        }
    }
}
