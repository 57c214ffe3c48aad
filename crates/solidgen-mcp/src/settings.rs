//! Server settings
//!
//! Settings are read from the path given on the command line, or from
//! `{config_dir}/solidgen/settings.json` when that file exists. Missing
//! sections and fields fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solidgen_core::PromptConfig;

/// Parameters forwarded with every sampling request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    /// Upper bound on tokens the client's model may generate
    pub max_tokens: u32,
    /// Sampling temperature; left to the client when unset
    pub temperature: Option<f32>,
    /// Optional system prompt sent alongside the user message
    pub system_prompt: Option<String>,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: None,
            system_prompt: None,
        }
    }
}

/// All server settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Constants embedded in the generation prompt
    pub prompt: PromptConfig,
    /// Sampling request parameters
    pub sampling: SamplingSettings,
}

/// Get the path to the per-user settings file
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("solidgen").join("settings.json"))
}

/// Load settings from a specific file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid settings JSON.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid settings file {}", path.display()))
}

/// Load settings, preferring an explicit path over the per-user file
///
/// An explicit path must exist. The per-user file is optional; without it
/// the defaults are used.
///
/// # Errors
/// Returns an error if the chosen file cannot be read or parsed.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_from(path);
    }

    match default_settings_path() {
        Some(path) if path.exists() => load_settings_from(&path),
        _ => Ok(Settings::default()),
    }
}
