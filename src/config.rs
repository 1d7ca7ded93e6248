use crate::teams::{TeamSize, DEFAULT_MAX_PAIRING_ATTEMPTS};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "bracket.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub players_per_team: TeamSize,
    pub seed: Option<u64>,
    pub max_pairing_attempts: u32,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players_per_team: TeamSize::Pair,
            seed: None,
            max_pairing_attempts: DEFAULT_MAX_PAIRING_ATTEMPTS,
            format: OutputFormat::Text,
        }
    }
}

/// Keys accepted in `bracket.toml`; all optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    players_per_team: Option<TeamSize>,
    seed: Option<u64>,
    max_pairing_attempts: Option<u32>,
    format: Option<OutputFormat>,
}

/// Defaults, then the settings file, then `BRACKET_*` environment variables.
///
/// An explicit `config_path` must exist; the default `bracket.toml` is
/// optional.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();

    let file_cfg = match config_path {
        Some(path) => Some(read_file_settings(path)?),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Some(read_file_settings(Path::new(DEFAULT_CONFIG_FILE))?)
        }
        None => None,
    };
    if let Some(file_cfg) = file_cfg {
        apply_file(&mut settings, file_cfg);
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn read_file_settings(path: &Path) -> Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let parsed = parse_file_settings(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    debug!(path = %path.display(), "loaded settings file");
    Ok(parsed)
}

fn parse_file_settings(raw: &str) -> Result<FileSettings> {
    Ok(toml::from_str(raw)?)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.players_per_team {
        settings.players_per_team = v;
    }
    if let Some(v) = file_cfg.seed {
        settings.seed = Some(v);
    }
    if let Some(v) = file_cfg.max_pairing_attempts {
        settings.max_pairing_attempts = v;
    }
    if let Some(v) = file_cfg.format {
        settings.format = v;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("BRACKET_PLAYERS_PER_TEAM") {
        match v.trim().parse::<u8>().ok().and_then(|n| TeamSize::try_from(n).ok()) {
            Some(size) => settings.players_per_team = size,
            None => warn!(value = %v, "ignoring invalid BRACKET_PLAYERS_PER_TEAM"),
        }
    }

    if let Some(v) = lookup("BRACKET_SEED") {
        match v.trim().parse::<u64>() {
            Ok(seed) => settings.seed = Some(seed),
            Err(error) => warn!(value = %v, %error, "ignoring invalid BRACKET_SEED"),
        }
    }

    if let Some(v) = lookup("BRACKET_MAX_PAIRING_ATTEMPTS") {
        match v.trim().parse::<u32>() {
            Ok(attempts) => settings.max_pairing_attempts = attempts,
            Err(error) => warn!(value = %v, %error, "ignoring invalid BRACKET_MAX_PAIRING_ATTEMPTS"),
        }
    }

    if let Some(v) = lookup("BRACKET_FORMAT") {
        match OutputFormat::from_str(v.trim(), true) {
            Ok(format) => settings.format = format,
            Err(error) => warn!(value = %v, %error, "ignoring invalid BRACKET_FORMAT"),
        }
    }
}
