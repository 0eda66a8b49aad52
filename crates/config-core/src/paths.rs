// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Configuration file path discovery

use std::path::{Path, PathBuf};

const APP_DIR: &str = "startup-backoffice";

/// Directory (relative to a project root) holding project-level config
pub const PROJECT_DIR: &str = ".backoffice";

/// Configuration file paths for the file-backed scopes
#[derive(Debug, Clone)]
pub struct Paths {
    pub system: PathBuf,
    pub user: PathBuf,
    pub project: Option<PathBuf>,
    pub cli_config: Option<PathBuf>,
}

impl Paths {
    pub fn with_cli_config(mut self, cli_config: Option<PathBuf>) -> Self {
        self.cli_config = cli_config;
        self
    }
}

/// Discover configuration file paths for the current environment
pub fn discover_paths(project_root: Option<&Path>) -> Paths {
    Paths {
        system: system_config_path(),
        user: user_config_path(),
        project: project_root.map(|root| root.join(PROJECT_DIR).join("config.toml")),
        cli_config: None,
    }
}

fn system_config_path() -> PathBuf {
    if cfg!(target_os = "macos") {
        PathBuf::from("/Library/Application Support")
            .join(APP_DIR)
            .join("config.toml")
    } else if cfg!(target_os = "windows") {
        PathBuf::from(std::env::var("ProgramData").unwrap_or_else(|_| "C:\\ProgramData".into()))
            .join(APP_DIR)
            .join("config.toml")
    } else {
        PathBuf::from("/etc").join(APP_DIR).join("config.toml")
    }
}

/// User config: `$BO_HOME/config.toml` wins over the platform location
fn user_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("BO_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".into())).join(".config"))
        .join(APP_DIR)
        .join("config.toml")
}
