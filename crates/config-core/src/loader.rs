// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! TOML loading and JSON validation functionality

use anyhow::{Context, Result};
use serde_json::Value as J;
use std::path::Path;
use std::sync::OnceLock;

use crate::Scope;

/// Parse a TOML document into the JSON form the engine works on
pub fn parse_toml_to_json(toml_str: &str) -> Result<J> {
    let toml: toml::Value = toml_str.parse::<toml::Value>()?;
    Ok(serde_json::to_value(toml)?)
}

/// Validate a layer against the schema generated from [`crate::SchemaRoot`]
pub fn validate_against_schema(v: &J) -> Result<()> {
    use jsonschema::{Draft, JSONSchema};

    static VALIDATOR: OnceLock<std::result::Result<JSONSchema, String>> = OnceLock::new();

    let validator = VALIDATOR.get_or_init(|| {
        JSONSchema::options()
            .with_draft(Draft::Draft202012)
            .compile(crate::schema::config_schema())
            .map_err(|e| e.to_string())
    });

    let validator = match validator {
        Ok(validator) => validator,
        Err(e) => anyhow::bail!("Config schema failed to compile: {}", e),
    };

    if let Err(errors) = validator.validate(v) {
        let error_msg = errors.map(|e| e.to_string()).collect::<Vec<_>>().join("\n  - ");
        anyhow::bail!("Config schema validation failed:\n  - {}", error_msg);
    }

    Ok(())
}

/// A parsed and validated configuration layer
#[derive(Debug, Clone)]
pub struct Layer {
    pub scope: Scope,
    pub json: J,
}

/// Load and validate a configuration layer from file
pub fn read_layer_from_file(path: &Path, scope: Scope) -> Result<Layer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {:?}", path))?;

    let json = parse_toml_to_json(&content)
        .with_context(|| format!("parsing config file {:?}", path))?;
    validate_against_schema(&json).with_context(|| format!("validating config file {:?}", path))?;

    tracing::debug!(path = %path.display(), %scope, "loaded config layer");
    Ok(Layer { scope, json })
}

/// Like [`read_layer_from_file`], but a missing file is simply no layer
pub fn read_optional_layer(path: &Path, scope: Scope) -> Result<Option<Layer>> {
    if !path.exists() {
        return Ok(None);
    }
    read_layer_from_file(path, scope).map(Some)
}
