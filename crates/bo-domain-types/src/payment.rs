// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Payment records
//!
//! A payment belongs to exactly one startup. Only payments that reached the
//! `paid` state count as money received.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use validator::Validate;

use crate::billing::Amount;

/// Lifecycle state of a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Requested from the founders, not settled yet
    Pending,
    /// Settled; counts toward the amount already received
    Paid,
    /// Attempted and rejected by the gateway
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "failed" => Ok(PaymentStatus::Failed),
            _ => Err(format!("Unknown payment status: {}", s)),
        }
    }
}

/// A single payment made (or attempted) by a startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "kebab-case")]
pub struct Payment {
    /// Gateway or bookkeeping reference, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[validate(range(min = 0))]
    pub amount: Amount,
    pub status: PaymentStatus,
}

impl Payment {
    pub fn new(amount: Amount, status: PaymentStatus) -> Self {
        Self {
            reference: None,
            amount,
            status,
        }
    }

    pub fn paid(amount: Amount) -> Self {
        Self::new(amount, PaymentStatus::Paid)
    }

    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}
