// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Test helpers shared across the workspace
//!
//! Each test that uses [`TestLogger`] writes its own log file under
//! `target/test-logs/<date>/`. Passing tests print one line; failing tests
//! print where the log is.

pub mod logging;
pub mod macros;

pub use logging::{create_unique_test_log, TestLogError, TestLogger};
