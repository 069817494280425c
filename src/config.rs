// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Cashclip", "cashclip"));

pub const API_URL_ENV: &str = "CASHCLIP_API_URL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Settings persisted in `config.json`. Every field is optional on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Resolved runtime configuration, handed to the backend explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn new(api_url: &str) -> Result<Self> {
        Ok(Config {
            api_url: normalize_url(api_url)?,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Picks the base URL from the command-line flag, then the environment, then the file.
    pub fn resolve(flag: Option<&str>, env: Option<&str>, file: &FileConfig) -> Result<Self> {
        let raw = flag
            .or(env)
            .or(file.api_url.as_deref())
            .filter(|s| !s.trim().is_empty())
            .with_context(|| {
                format!(
                    "No backend URL configured: pass --api-url, set {} or run `cashclip config set-url <URL>`",
                    API_URL_ENV
                )
            })?;
        Ok(Config {
            api_url: normalize_url(raw)?,
            timeout_secs: file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// `{base}/{path}` without doubled slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

pub fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).with_context(|| format!("Invalid backend URL '{}'", raw.trim()))?;
    Ok(trimmed.to_string())
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

/// Reads the config file; a missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let s = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let cfg = serde_json::from_str(&s)
        .with_context(|| format!("Parse config at {}", path.display()))?;
    Ok(cfg)
}

/// Like `load_from`, but an unreadable file is logged and treated as empty so the
/// flag and environment sources still work.
pub fn load_or_default(path: &Path) -> FileConfig {
    load_from(path).unwrap_or_else(|e| {
        warn!(error = %format!("{:#}", e), "ignoring config file");
        FileConfig::default()
    })
}

pub fn save_to(path: &Path, cfg: &FileConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config dir")?;
    }
    fs::write(path, serde_json::to_string_pretty(cfg)?)
        .with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}
