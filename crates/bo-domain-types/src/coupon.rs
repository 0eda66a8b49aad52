// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Coupon records

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A discount coupon from the catalog
///
/// Coupons are immutable once issued. A startup carries at most one applied
/// coupon at a time; see [`crate::Startup::applied_coupon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "kebab-case")]
pub struct Coupon {
    #[validate(length(min = 1, max = 250))]
    pub code: String,
    /// Percentage in `0..=100`
    #[validate(range(max = 100))]
    pub discount_percentage: u8,
    /// Free-text instructions shown next to the fee
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Coupon {
    pub fn new(code: impl Into<String>, discount_percentage: u8) -> Self {
        Self {
            code: code.into(),
            discount_percentage,
            instructions: None,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}
