// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for fee schedule construction

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BillingError>;

/// Rejected fee schedule parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("Base fee must be positive, got {0}")]
    NonPositiveBaseFee(i64),

    #[error("EMI installments must be at least 1")]
    ZeroInstallments,
}
