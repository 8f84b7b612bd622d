// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendsheet", "spendsheet"));

/// Backend credentials and location. The token is an OAuth bearer token with
/// spreadsheet scope; how it is minted is the caller's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub spreadsheet_id: String,
    pub token: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.join("settings.json"))
}

/// Settings file with SPENDSHEET_* environment overrides on top.
pub fn load() -> Result<Settings> {
    let path = settings_path()?;
    let mut settings = if path.exists() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Read settings at {}", path.display()))?;
        serde_json::from_str::<Settings>(&raw)
            .with_context(|| format!("Parse settings at {}", path.display()))?
    } else {
        Settings {
            spreadsheet_id: String::new(),
            token: String::new(),
            base_url: None,
        }
    };
    if let Ok(v) = std::env::var("SPENDSHEET_SPREADSHEET_ID") {
        settings.spreadsheet_id = v;
    }
    if let Ok(v) = std::env::var("SPENDSHEET_TOKEN") {
        settings.token = v;
    }
    if let Ok(v) = std::env::var("SPENDSHEET_BASE_URL") {
        settings.base_url = Some(v);
    }
    if settings.spreadsheet_id.is_empty() || settings.token.is_empty() {
        return Err(anyhow::anyhow!(
            "Missing credentials: set SPENDSHEET_SPREADSHEET_ID and SPENDSHEET_TOKEN, or fill {}",
            path.display()
        ));
    }
    Ok(settings)
}
