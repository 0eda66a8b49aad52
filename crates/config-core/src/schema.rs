// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Schema root definition for configuration validation.
//!
//! `SchemaRoot` describes the canonical shape of the whole configuration
//! document. It exists for schema generation only; modules read their own
//! typed sections through [`crate::extract`].

use std::sync::OnceLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as J;

use bo_config_types::{
    billing::BillingSection,
    ledger::LedgerSection,
    ui::{LogFormat, LogLevel},
};

/// The top-level keys repeat [`bo_config_types::ui::UiRoot`] field by field.
/// Flattening would drop `additionalProperties: false` from the schema.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SchemaRoot {
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,

    pub billing: Option<BillingSection>,
    pub ledger: Option<LedgerSection>,

    /// System-layer only: dotted keys no other layer may override
    #[serde(default)]
    pub enforced: Vec<String>,
}

/// JSON schema of [`SchemaRoot`], generated once
pub fn config_schema() -> &'static J {
    static SCHEMA: OnceLock<J> = OnceLock::new();
    SCHEMA.get_or_init(|| serde_json::to_value(schemars::schema_for!(SchemaRoot)).unwrap_or(J::Null))
}

/// JSON types the schema allows at a dotted key
///
/// Follows `$ref` into the schema definitions and looks through
/// `anyOf`/`oneOf`/`allOf`. Unknown keys give an empty list.
pub fn types_at(dotted: &str) -> Vec<String> {
    let root = config_schema();
    let mut current = vec![root];
    for segment in dotted.split('.') {
        current = current
            .into_iter()
            .flat_map(|schema| alternatives(root, schema))
            .filter_map(|schema| schema.get("properties").and_then(|p| p.get(segment)))
            .collect();
    }

    let mut types: Vec<String> = current
        .into_iter()
        .flat_map(|schema| alternatives(root, schema))
        .flat_map(|schema| match schema.get("type") {
            Some(J::String(name)) => vec![name.clone()],
            Some(J::Array(names)) => {
                names.iter().filter_map(|n| n.as_str().map(str::to_string)).collect()
            }
            _ => Vec::new(),
        })
        .collect();
    types.sort();
    types.dedup();
    types
}

/// `schema` itself plus every subschema it defers to
fn alternatives<'a>(root: &'a J, schema: &'a J) -> Vec<&'a J> {
    let mut out = Vec::new();
    let mut pending = vec![schema];
    while let Some(next) = pending.pop() {
        if let Some(target) = next.get("$ref").and_then(J::as_str).and_then(|r| resolve_ref(root, r)) {
            pending.push(target);
        }
        for key in ["anyOf", "oneOf", "allOf"] {
            if let Some(J::Array(members)) = next.get(key) {
                pending.extend(members.iter());
            }
        }
        out.push(next);
    }
    out
}

fn resolve_ref<'a>(root: &'a J, reference: &str) -> Option<&'a J> {
    reference.strip_prefix('#').and_then(|pointer| root.pointer(pointer))
}
