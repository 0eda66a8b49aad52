// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for ledger loading and lookup

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error in {record}: {source}")]
    Validation {
        record: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Startup {startup} references unknown coupon {code}")]
    UnknownCoupon { startup: String, code: String },

    #[error("Duplicate coupon code: {0}")]
    DuplicateCoupon(String),

    #[error("Duplicate startup id: {0}")]
    DuplicateStartup(String),

    #[error("Startup not found: {0}")]
    StartupNotFound(String),
}
