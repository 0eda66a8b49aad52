// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Domain types for the startup back office
//!
//! These are the records the admissions back office reasons about: startups
//! enrolled in the accelerator, the payments they made, the coupon applied to
//! them and the sessions shown on the founder dashboard.
//!
//! Persistence is somebody else's job. The types here are plain data so that
//! any record source can hand them over and any presentation layer can
//! serialize what is computed from them.

pub mod billing;
pub mod coupon;
pub mod payment;
pub mod session;
pub mod startup;

// Re-export commonly used types
pub use billing::*;
pub use coupon::*;
pub use payment::*;
pub use session::*;
pub use startup::*;
