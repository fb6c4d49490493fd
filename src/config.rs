use crate::app::keymap::KeyConfig;
use crate::domain::timer::{DEFAULT_DAILY_TARGET, DEFAULT_FOCUS_SECS};
use crate::theme::PaletteType;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_TASK: &str = "Review Acme proposal";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: PaletteType,
    pub timer: TimerConfig,
    pub keys: KeyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub focus_minutes: u32,
    pub daily_target: u32,
    pub task: String,
    pub count_skipped: bool, // Whether skipping a session counts toward the target
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_SECS / 60,
            daily_target: DEFAULT_DAILY_TARGET,
            task: DEFAULT_TASK.to_string(),
            count_skipped: false,
        }
    }
}

impl TimerConfig {
    #[must_use]
    pub fn focus_secs(&self) -> u32 {
        self.focus_minutes.saturating_mul(60)
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("focushub");
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

impl AppConfig {
    /// Loads the user config, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(path = %path.display(), theme = ?config.theme, "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timer.focus_minutes == 0 {
            bail!("timer.focus_minutes must be at least 1");
        }
        if self.timer.daily_target == 0 {
            bail!("timer.daily_target must be at least 1");
        }
        Ok(())
    }
}
