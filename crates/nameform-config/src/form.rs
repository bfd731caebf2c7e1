use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Configuration schema loaded from `config.toml`.
///
/// Every section and key is optional; omitted values take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub form: FormSection,
    pub snapshot: SnapshotSection,
    pub ui: UiSection,
}

/// Submit behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormSection {
    /// Delay added per accepted submit, in milliseconds.
    pub delay_step_ms: u64,
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            delay_step_ms: 1000,
        }
    }
}

/// Where and when the screen snapshot is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotSection {
    /// Snapshot file; the state directory default is used when unset.
    pub path: Option<PathBuf>,
    /// Restore the last snapshot when the app starts.
    pub restore_on_launch: bool,
}

impl Default for SnapshotSection {
    fn default() -> Self {
        Self {
            path: None,
            restore_on_launch: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiSection {
    /// Upper bound on how long the loop waits for terminal input.
    pub poll_ms: u64,
}

impl Default for UiSection {
    fn default() -> Self {
        Self { poll_ms: 16 }
    }
}

impl FormConfig {
    /// Parse and validate config TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;

        Self::from_toml_str(&raw).with_context(|| format!("invalid config at {}", path.display()))
    }

    /// Load from [`config_path`], falling back to defaults when the file is
    /// absent.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            Self::from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.form.delay_step_ms == 0 {
            bail!("form.delay_step_ms must be at least 1");
        }
        if !(1..=1000).contains(&self.ui.poll_ms) {
            bail!(
                "ui.poll_ms must be between 1 and 1000, got {}",
                self.ui.poll_ms
            );
        }
        if let Some(path) = &self.snapshot.path {
            if path.as_os_str().is_empty() {
                bail!("snapshot.path must not be empty");
            }
        }
        Ok(())
    }

    pub fn delay_step(&self) -> Duration {
        Duration::from_millis(self.form.delay_step_ms)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.ui.poll_ms)
    }
}

/// Return the config file path.
///
/// Precedence: `NAMEFORM_CONFIG` env var > `<platform config dir>/nameform/config.toml`.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("NAMEFORM_CONFIG") {
        return PathBuf::from(path);
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("nameform").join(CONFIG_FILE),
        None => PathBuf::from(CONFIG_FILE),
    }
}
