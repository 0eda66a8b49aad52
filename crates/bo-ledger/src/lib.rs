// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Read-only record source for the fee calculator
//!
//! Startups, their payments and the coupon catalog are kept in a TOML ledger
//! file. [`FileLedger`] loads and validates it; [`FeeAndCouponService`] looks
//! a startup up and runs it through the calculator.

pub mod error;
pub mod ledger;
pub mod records;
pub mod service;
pub mod storage;

pub use error::{Error, Result};
pub use ledger::{FileLedger, InMemoryLedger, StartupLedger};
pub use records::{LedgerFile, StartupRecord};
pub use service::FeeAndCouponService;
