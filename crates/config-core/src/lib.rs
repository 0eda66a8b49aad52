// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Layered configuration engine with schema validation, merging, and provenance tracking.
//!
//! Layers come from TOML files, `BO_*` environment variables and `--set`
//! flags. Every layer is turned into a `serde_json::Value`, merged in
//! precedence order, and typed sections are extracted from the result with
//! [`extract`].

pub mod enforcement;
pub mod env;
pub mod extract;
pub mod loader;
pub mod merge;
pub mod paths;
pub mod provenance;
pub mod schema;

pub use provenance::{Provenance, Scope};
pub use schema::SchemaRoot;

use anyhow::Result;
use serde_json::Value as J;

/// Final resolved configuration with provenance information
#[derive(Debug)]
pub struct Resolved {
    /// Merged configuration document
    pub json: J,
    pub provenance: Provenance,
}

/// Load and merge all configuration layers
///
/// Precedence order: system < user < project < env < cli-config < flags.
/// Keys listed under `enforced` in the system layer are masked out of every
/// other layer.
pub fn load_all(paths: &paths::Paths, flag_sets: &[(&str, &str)]) -> Result<Resolved> {
    let system = loader::read_optional_layer(&paths.system, Scope::System)?;
    let user = loader::read_optional_layer(&paths.user, Scope::User)?;
    let project = match &paths.project {
        Some(path) => loader::read_optional_layer(path, Scope::Project)?,
        None => None,
    };
    let cli_config = match &paths.cli_config {
        // an explicitly requested file must exist
        Some(path) => Some(loader::read_layer_from_file(path, Scope::CliConfig)?),
        None => None,
    };

    let enforcement = system
        .as_ref()
        .map(|layer| enforcement::Enforcement::from_system_layer(&layer.json))
        .unwrap_or_default();

    let layers = [
        (system.map(|l| l.json), Scope::System),
        (user.map(|l| l.json), Scope::User),
        (project.map(|l| l.json), Scope::Project),
        (Some(env::env_overlay()?), Scope::Env),
        (cli_config.map(|l| l.json), Scope::CliConfig),
        (Some(env::flags_overlay(flag_sets)), Scope::Flags),
    ];

    let mut json = serde_json::json!({});
    let mut provenance = Provenance::default();
    for (layer, scope) in layers {
        let Some(mut layer) = layer else {
            continue;
        };
        if scope != Scope::System {
            enforcement.mask(&mut layer);
        }
        provenance.record_layer(&layer, scope);
        merge::merge_two_json(&mut json, layer);
    }
    provenance.enforced.extend(enforcement.keys);

    Ok(Resolved { json, provenance })
}
