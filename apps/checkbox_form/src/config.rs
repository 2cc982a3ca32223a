use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "checkbox_form.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: Vec<String>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: vec!["One".into(), "Two".into(), "Three".into()],
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    options: Option<Vec<String>>,
    log_filter: Option<String>,
}

pub fn load_settings(path: &Path, cli_options: &[String]) -> anyhow::Result<Settings> {
    load_settings_with(path, cli_options, |key| std::env::var(key).ok())
}

/// Layers defaults, the settings file, environment and CLI flags, in that order.
pub fn load_settings_with<F>(
    path: &Path,
    cli_options: &[String],
    env: F,
) -> anyhow::Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        if let Some(v) = file_cfg.options {
            settings.options = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("CHECKBOX_OPTIONS") {
        settings.options = split_list(&v);
    }
    if let Some(v) = env("APP__OPTIONS") {
        settings.options = split_list(&v);
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if !cli_options.is_empty() {
        settings.options = cli_options.to_vec();
    }

    settings.options = validate_options(&settings.options)?;
    Ok(settings)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

/// Trims labels and rejects blanks and repeats.
pub fn validate_options(options: &[String]) -> anyhow::Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut validated = Vec::with_capacity(options.len());
    for (idx, option) in options.iter().enumerate() {
        let label = option.trim();
        if label.is_empty() {
            bail!("option #{} is empty", idx + 1);
        }
        if !seen.insert(label.to_string()) {
            bail!("option '{label}' is configured more than once");
        }
        validated.push(label.to_string());
    }
    Ok(validated)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
