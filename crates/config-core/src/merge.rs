// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! JSON merging functionality

use serde_json::{Map, Value as J};

/// Merge `layer` on top of `base`
///
/// Objects merge recursively; arrays and scalars replace; a null on the right
/// keeps the left value.
pub fn merge_two_json(base: &mut J, layer: J) {
    match (base, layer) {
        (J::Object(left), J::Object(right)) => {
            for (key, value) in right {
                merge_two_json(left.entry(key).or_insert(J::Null), value);
            }
        }
        (_, J::Null) => {}
        (left, right) => *left = right,
    }
}

/// Set `value` at a dotted path, creating (or overwriting) objects on the way
pub fn insert_dotted(root: &mut J, dotted: &str, value: J) {
    let mut cursor = root;
    let mut segments = dotted.split('.').peekable();
    while let Some(segment) = segments.next() {
        let map = object_mut(cursor);
        if segments.peek().is_none() {
            map.insert(segment.to_string(), value);
            return;
        }
        cursor = map
            .entry(segment.to_string())
            .or_insert_with(|| J::Object(Map::new()));
    }
}

fn object_mut(value: &mut J) -> &mut Map<String, J> {
    if !value.is_object() {
        *value = J::Object(Map::new());
    }
    match value {
        J::Object(map) => map,
        _ => unreachable!("value was just replaced by an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_deep_objects() {
        let mut base = serde_json::json!({"billing": {"base-fee": 100000}});
        merge_two_json(&mut base, serde_json::json!({"billing": {"emi-installments": 12}}));
        assert_eq!(base["billing"]["base-fee"], 100000);
        assert_eq!(base["billing"]["emi-installments"], 12);
    }

    #[test]
    fn test_merge_arrays_replace() {
        let mut base = serde_json::json!({"enforced": ["a", "b"]});
        merge_two_json(&mut base, serde_json::json!({"enforced": ["c"]}));
        assert_eq!(base["enforced"], serde_json::json!(["c"]));
    }

    #[test]
    fn test_merge_null_keeps_left() {
        let mut base = serde_json::json!({"log-level": "info"});
        merge_two_json(&mut base, serde_json::json!({"log-level": null}));
        assert_eq!(base["log-level"], "info");
    }

    #[test]
    fn test_insert_dotted_creates_and_overwrites() {
        let mut root = serde_json::json!({"ledger": "scalar"});
        insert_dotted(&mut root, "ledger.path", serde_json::json!("ledger.toml"));
        insert_dotted(&mut root, "log-level", serde_json::json!("debug"));
        assert_eq!(root["ledger"]["path"], "ledger.toml");
        assert_eq!(root["log-level"], "debug");
    }
}
