// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::kpi::KpiThresholds;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Salesboard", "salesboard"));

pub const API_URL_ENV: &str = "SALESBOARD_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub timeout_secs: u64,
    /// Rows shown in "top" cards such as best-selling products.
    pub top_limit: usize,
    /// Rows shown in detail tables.
    pub table_limit: usize,
    pub thresholds: KpiThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "http://localhost:5000".to_string(),
            timeout_secs: 15,
            top_limit: 5,
            table_limit: 10,
            thresholds: KpiThresholds::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read config at {}", path.display()))?;
        let cfg: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(cfg)
    }

    /// Defaults, then the config file, then the environment, then the flag.
    /// An explicit `--config` path must exist; the platform default may not.
    pub fn resolve(explicit: Option<&Path>, api_url_flag: Option<&str>) -> Result<Self> {
        let mut cfg = match explicit {
            Some(path) => Config::from_file(path)?,
            None => match config_path() {
                Ok(path) if path.exists() => Config::from_file(&path)?,
                _ => Config::default(),
            },
        };
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                cfg.api_base_url = url.trim().to_string();
            }
        }
        if let Some(url) = api_url_flag {
            cfg.api_base_url = url.trim().to_string();
        }
        tracing::debug!(api = %cfg.api_base_url, "configuration resolved");
        Ok(cfg)
    }

    /// Problems that make the dashboard misleading without stopping it.
    pub fn issues(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if self.top_limit == 0 {
            out.push(("config_top_limit".into(), "top_limit is 0".into()));
        }
        if self.table_limit == 0 {
            out.push(("config_table_limit".into(), "table_limit is 0".into()));
        }
        if self.timeout_secs == 0 {
            out.push(("config_timeout".into(), "timeout_secs is 0".into()));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            out.push(("config_api_url".into(), self.api_base_url.clone()));
        }
        out
    }
}
