// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Provenance tracking for configuration values

use serde::Serialize;
use serde_json::Value as J;
use std::collections::{BTreeMap, BTreeSet};

/// Configuration layers, lowest precedence first
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    System,
    User,
    Project,
    Env,
    CliConfig,
    Flags,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Scope::System => "system",
            Scope::User => "user",
            Scope::Project => "project",
            Scope::Env => "env",
            Scope::CliConfig => "cli-config",
            Scope::Flags => "flags",
        };
        f.write_str(name)
    }
}

/// Where each resolved value came from
#[derive(Default, Clone, Debug)]
pub struct Provenance {
    /// Dotted key -> scope whose value ended up in the merged document
    pub winner: BTreeMap<String, Scope>,
    /// Dotted key -> every (scope, value) that set it, in merge order
    pub changes: BTreeMap<String, Vec<(Scope, J)>>,
    /// Dotted keys locked by the system layer
    pub enforced: BTreeSet<String>,
}

impl Provenance {
    /// Record every leaf of `layer` as set by `scope`
    ///
    /// Arrays count as leaves since merging replaces them wholesale.
    pub fn record_layer(&mut self, layer: &J, scope: Scope) {
        self.record_at(layer, scope, "");
    }

    fn record_at(&mut self, value: &J, scope: Scope, prefix: &str) {
        match value {
            J::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    self.record_at(child, scope, &path);
                }
            }
            // a null never overrides anything during merge
            J::Null => {}
            leaf => {
                self.winner.insert(prefix.to_string(), scope);
                self.changes.entry(prefix.to_string()).or_default().push((scope, leaf.clone()));
            }
        }
    }

    pub fn origin_of(&self, dotted: &str) -> Option<Scope> {
        self.winner.get(dotted).copied()
    }
}
