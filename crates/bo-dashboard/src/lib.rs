// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Founder dashboard session logic
//!
//! Selects sessions by tag and splits them around the current time into
//! upcoming and past lists. Rendering is left to the caller.

pub mod board;
pub mod error;

pub use board::{filter_by_tags, load_sessions, past, upcoming, SessionBoard, SessionPartition};
pub use error::{Error, Result};
