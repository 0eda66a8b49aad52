// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Keys the system layer locks against overrides

use serde_json::Value as J;
use std::collections::BTreeSet;

#[derive(Debug, Default, Clone)]
pub struct Enforcement {
    /// Dotted key paths
    pub keys: BTreeSet<String>,
}

impl Enforcement {
    /// Read the `enforced = [...]` list out of the system layer
    pub fn from_system_layer(system: &J) -> Self {
        let keys = system
            .get("enforced")
            .and_then(J::as_array)
            .map(|entries| entries.iter().filter_map(J::as_str).map(str::to_string).collect())
            .unwrap_or_default();
        Self { keys }
    }

    /// Strip every enforced key from a lower-authority layer
    pub fn mask(&self, layer: &mut J) {
        for key in &self.keys {
            remove_dotted(layer, key);
        }
    }
}

fn remove_dotted(value: &mut J, dotted: &str) {
    let mut cursor = value;
    let mut segments = dotted.split('.').peekable();
    while let Some(segment) = segments.next() {
        let J::Object(map) = cursor else {
            return;
        };
        if segments.peek().is_none() {
            map.remove(segment);
            return;
        }
        match map.get_mut(segment) {
            Some(next) => cursor = next,
            None => return,
        }
    }
}
