// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Presentation payload
//!
//! Serialized with camelCase keys for the dashboard. The `coupon` key is left
//! out entirely when no coupon applies.

use bo_domain_types::{Amount, Coupon};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeProps {
    pub payable_fee: Amount,
    pub emi_undiscounted: Amount,
    pub emi: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponProps {
    pub code: String,
    pub discount: u8,
    /// Serialized as `null` when the coupon has none
    pub instructions: Option<String>,
}

impl From<&Coupon> for CouponProps {
    fn from(coupon: &Coupon) -> Self {
        Self {
            code: coupon.code.clone(),
            discount: coupon.discount_percentage,
            instructions: coupon.instructions.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeAndCouponProps {
    pub fee: FeeProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<CouponProps>,
}
