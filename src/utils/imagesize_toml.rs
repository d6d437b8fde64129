//! Load `.imagesize.toml` from a directory (CLI only). Lib callers pass [`ScanOpts`](crate::ScanOpts) directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct ImagesizeToml {
    #[serde(default)]
    pub settings: SettingsSection,
}

/// Every field optional: only values present in the file override the built-in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsSection {
    pub max_concurrency: Option<usize>,
    pub or_equal: Option<bool>,
    pub recursive: Option<bool>,
    pub sort_key: Option<String>,
    pub sort_order: Option<String>,
    pub unsorted: Option<bool>,
    pub verbose: Option<bool>,
}

pub fn parse_imagesize_toml(s: &str) -> Result<ImagesizeToml> {
    Ok(toml::from_str(s)?)
}

/// Load the settings file from `dir`. `Ok(None)` when the file does not exist.
pub fn load_imagesize_toml(dir: &Path) -> Result<Option<ImagesizeToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
    };
    parse_imagesize_toml(&s)
        .map(Some)
        .with_context(|| format!("parse {}", path.display()))
}
