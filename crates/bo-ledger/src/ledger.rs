// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bo_domain_types::Startup;
use tokio::sync::RwLock;
use validator::Validate;

use crate::error::{Error, Result};
use crate::storage::load_ledger;

/// Read-only lookup of startup records
#[async_trait]
pub trait StartupLedger: Send + Sync {
    /// Fully loaded startup, or `None` when the id is unknown
    async fn startup(&self, id: &str) -> Result<Option<Startup>>;

    /// All known ids, sorted
    async fn startup_ids(&self) -> Result<Vec<String>>;
}

/// Ledger backed by a TOML file
///
/// Clones share the loaded records.
#[derive(Clone)]
pub struct FileLedger {
    path: PathBuf,
    startups: Arc<RwLock<BTreeMap<String, Startup>>>,
}

impl FileLedger {
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let startups = load_ledger(&path).await?;
        Ok(Self {
            path,
            startups: Arc::new(RwLock::new(startups)),
        })
    }

    /// Re-read the file
    ///
    /// On error the previously loaded records stay in place.
    pub async fn reload(&self) -> Result<()> {
        let loaded = load_ledger(&self.path).await?;
        *self.startups.write().await = loaded;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn len(&self) -> usize {
        self.startups.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.startups.read().await.is_empty()
    }
}

#[async_trait]
impl StartupLedger for FileLedger {
    async fn startup(&self, id: &str) -> Result<Option<Startup>> {
        Ok(self.startups.read().await.get(id).cloned())
    }

    async fn startup_ids(&self) -> Result<Vec<String>> {
        Ok(self.startups.read().await.keys().cloned().collect())
    }
}

/// Ledger held entirely in memory
#[derive(Clone, Default)]
pub struct InMemoryLedger {
    startups: Arc<RwLock<BTreeMap<String, Startup>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records, validating each and rejecting duplicate ids
    pub fn from_startups(startups: impl IntoIterator<Item = Startup>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for startup in startups {
            check(&startup)?;
            if map.contains_key(&startup.id) {
                return Err(Error::DuplicateStartup(startup.id));
            }
            map.insert(startup.id.clone(), startup);
        }
        Ok(Self {
            startups: Arc::new(RwLock::new(map)),
        })
    }

    /// Add or replace a record
    pub async fn insert(&self, startup: Startup) -> Result<()> {
        check(&startup)?;
        self.startups.write().await.insert(startup.id.clone(), startup);
        Ok(())
    }
}

fn check(startup: &Startup) -> Result<()> {
    startup.validate().map_err(|source| Error::Validation {
        record: format!("startup {}", startup.id),
        source,
    })
}

#[async_trait]
impl StartupLedger for InMemoryLedger {
    async fn startup(&self, id: &str) -> Result<Option<Startup>> {
        Ok(self.startups.read().await.get(id).cloned())
    }

    async fn startup_ids(&self) -> Result<Vec<String>> {
        Ok(self.startups.read().await.keys().cloned().collect())
    }
}
