// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Ledger file loading

use std::collections::BTreeMap;
use std::path::Path;

use bo_domain_types::Startup;
use tokio::fs as async_fs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::records::LedgerFile;

/// Read, parse and validate the ledger at `path`
///
/// A missing file is an empty ledger.
pub async fn load_ledger(path: &Path) -> Result<BTreeMap<String, Startup>> {
    if !async_fs::try_exists(path).await.map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })? {
        debug!(path = %path.display(), "Ledger file not found, starting empty");
        return Ok(BTreeMap::new());
    }

    let content = async_fs::read_to_string(path).await.map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let startups = LedgerFile::parse(&content)?.into_startups()?;

    info!(
        path = %path.display(),
        startups = startups.len(),
        "Loaded startup ledger"
    );
    Ok(startups)
}
