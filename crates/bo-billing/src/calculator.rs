// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bo_domain_types::{Amount, BillingSnapshot};
use serde::Serialize;
use tracing::{debug, warn};

use crate::props::{CouponProps, FeeAndCouponProps, FeeProps};
use crate::rounding::{div_floor, div_round_half_away, saturate};
use crate::schedule::FeeSchedule;

/// Every intermediate figure of one fee calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub total_fee: Amount,
    pub payable_fee: Amount,
    pub paid_fee: Amount,
    /// Negative when the startup paid more than it owes
    pub remaining_payable: Amount,
    pub emi_undiscounted: Amount,
    pub calculated_emi: Amount,
    pub emi: Amount,
}

/// Computes fees from billing snapshots
///
/// Stateless apart from its schedule; share one instance freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeCalculator {
    schedule: FeeSchedule,
}

impl FeeCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> FeeSchedule {
        self.schedule
    }

    /// Work out every figure for `snapshot`
    pub fn breakdown(&self, snapshot: &BillingSnapshot) -> FeeBreakdown {
        let installments = i128::from(self.schedule.emi_installments());

        let total = i128::from(snapshot.billing_founders_count) * i128::from(self.schedule.base_fee());

        // The stored percentage multiplies the total as-is; a 30% coupon
        // makes the payable fee 30% of the total.
        let payable = match &snapshot.applied_coupon {
            Some(coupon) => div_floor(total * i128::from(coupon.discount_percentage), 100),
            None => total,
        };

        let paid = i128::from(snapshot.paid_fee);
        let remaining = payable - paid;

        let emi_undiscounted = div_round_half_away(total, installments);
        let calculated_emi = div_round_half_away(payable, installments);
        let emi = if calculated_emi <= remaining {
            calculated_emi
        } else {
            remaining
        };

        let breakdown = FeeBreakdown {
            total_fee: saturate(total),
            payable_fee: saturate(payable),
            paid_fee: snapshot.paid_fee,
            remaining_payable: saturate(remaining),
            emi_undiscounted: saturate(emi_undiscounted),
            calculated_emi: saturate(calculated_emi),
            emi: saturate(emi),
        };

        debug!(
            founders = snapshot.billing_founders_count,
            total_fee = breakdown.total_fee,
            payable_fee = breakdown.payable_fee,
            paid_fee = breakdown.paid_fee,
            remaining_payable = breakdown.remaining_payable,
            emi = breakdown.emi,
            "Computed fee breakdown"
        );
        if breakdown.remaining_payable < 0 {
            warn!(
                remaining_payable = breakdown.remaining_payable,
                "Paid fee exceeds payable fee"
            );
        }

        breakdown
    }

    /// Presentation payload for `snapshot`
    pub fn calculate(&self, snapshot: &BillingSnapshot) -> FeeAndCouponProps {
        let breakdown = self.breakdown(snapshot);
        FeeAndCouponProps {
            fee: FeeProps {
                payable_fee: breakdown.payable_fee,
                emi_undiscounted: breakdown.emi_undiscounted,
                emi: breakdown.emi,
            },
            coupon: snapshot.applied_coupon.as_ref().map(CouponProps::from),
        }
    }
}
