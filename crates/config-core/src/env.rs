// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Environment variable and CLI flag overlays

use anyhow::Result;
use serde_json::{Map, Value as J};

/// Prefix of the environment variables that feed the env layer
pub const ENV_PREFIX: &str = "BO";

/// Variables under the prefix that locate files instead of setting values
const RESERVED_KEYS: &[&str] = &["home"];

/// Build the env layer from `BO_*` variables
///
/// `__` separates nesting levels and a single `_` inside a segment becomes a
/// `-`, so `BO_BILLING__BASE_FEE=150000` sets `billing.base-fee`. A value is
/// typed as a number or boolean only where the schema declares that type for
/// its key; everything else stays a string.
pub fn env_overlay() -> Result<J> {
    env_overlay_with_prefix(ENV_PREFIX)
}

pub fn env_overlay_with_prefix(prefix: &str) -> Result<J> {
    let built = config::Config::builder()
        .add_source(
            config::Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut map = built.try_deserialize::<Map<String, J>>()?;
    for key in RESERVED_KEYS {
        map.remove(*key);
    }
    Ok(typed_by_schema(kebab_keys(J::Object(map)), ""))
}

/// Turn string leaves into numbers or booleans where the schema asks for one
fn typed_by_schema(value: J, prefix: &str) -> J {
    match value {
        J::Object(map) => J::Object(
            map.into_iter()
                .map(|(key, child)| {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    (key, typed_by_schema(child, &path))
                })
                .collect(),
        ),
        J::String(raw) => coerce_scalar(&raw, &crate::schema::types_at(prefix))
            .unwrap_or(J::String(raw)),
        other => other,
    }
}

fn coerce_scalar(raw: &str, types: &[String]) -> Option<J> {
    let allows = |name: &str| types.iter().any(|t| t == name);
    let trimmed = raw.trim();

    if allows("integer") {
        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(J::from(n));
        }
    }
    if allows("number") {
        if let Some(n) = trimmed.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
            return Some(J::Number(n));
        }
    }
    if allows("boolean") {
        if let Ok(b) = trimmed.to_ascii_lowercase().parse::<bool>() {
            return Some(J::Bool(b));
        }
    }
    None
}

/// Build the flags layer from `key.path=value` pairs
///
/// Values are read as JSON when they parse as JSON (numbers, booleans,
/// arrays) and kept as plain strings otherwise.
pub fn flags_overlay(kv_pairs: &[(&str, &str)]) -> J {
    let mut root = J::Object(Map::new());
    for (key, raw) in kv_pairs {
        let value = serde_json::from_str::<J>(raw).unwrap_or_else(|_| J::String(raw.to_string()));
        crate::merge::insert_dotted(&mut root, key, value);
    }
    root
}

/// Split a `key=value` flag argument
pub fn parse_flag(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected key=value, got '{}'", arg))?;
    if key.trim().is_empty() {
        anyhow::bail!("empty key in '{}'", arg);
    }
    Ok((key.trim().to_string(), value.to_string()))
}

fn kebab_keys(value: J) -> J {
    match value {
        J::Object(map) => J::Object(
            map.into_iter()
                .map(|(key, child)| (key.replace('_', "-"), kebab_keys(child)))
                .collect(),
        ),
        other => other,
    }
}
