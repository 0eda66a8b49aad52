// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Typed extraction of configuration sections

use anyhow::anyhow;
use serde::de::DeserializeOwned;
use serde_json::Value as J;

/// Extract the whole document as `T`
pub fn get<T: DeserializeOwned>(root: &J) -> anyhow::Result<T> {
    serde_path_to_error::deserialize(root.clone())
        .map_err(|e| anyhow!("Root extraction failed: {}", e))
}

/// Extract the section at a dotted path; a missing path is an error
pub fn get_at<T: DeserializeOwned>(root: &J, dotted: &str) -> anyhow::Result<T> {
    let section = lookup(root, dotted).ok_or_else(|| anyhow!("missing path: {}", dotted))?;
    serde_path_to_error::deserialize(section.clone())
        .map_err(|e| anyhow!("Path '{}' extraction failed: {}", dotted, e))
}

/// Like [`get_at`], but an absent section yields `T::default()`
///
/// A present but malformed section is still an error.
pub fn get_at_or_default<T: DeserializeOwned + Default>(root: &J, dotted: &str) -> anyhow::Result<T> {
    match lookup(root, dotted) {
        None | Some(J::Null) => Ok(T::default()),
        Some(_) => get_at(root, dotted),
    }
}

fn lookup<'a>(root: &'a J, dotted: &str) -> Option<&'a J> {
    dotted.split('.').try_fold(root, |cursor, segment| cursor.get(segment))
}
