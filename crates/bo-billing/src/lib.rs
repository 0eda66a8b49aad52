// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Fee and coupon calculation
//!
//! [`FeeCalculator`] turns a [`BillingSnapshot`](bo_domain_types::BillingSnapshot)
//! into the figures the founder dashboard shows: the payable fee, the
//! undiscounted monthly installment and the installment actually due.
//!
//! The calculation is a pure function of the snapshot and the injected
//! [`FeeSchedule`]. It never fails; odd inputs (overpayment, a zero founder
//! count) produce deterministic figures rather than errors.

pub mod calculator;
pub mod error;
pub mod props;
pub mod rounding;
pub mod schedule;

#[cfg(test)]
mod golden_vectors;

pub use calculator::{FeeBreakdown, FeeCalculator};
pub use error::{BillingError, Result};
pub use props::{CouponProps, FeeAndCouponProps, FeeProps};
pub use schedule::FeeSchedule;
