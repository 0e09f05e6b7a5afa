//! Configuration file loading and the clock it selects.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use hinoki_dates::{Clock, FixedClock, SystemClock};
use serde::Deserialize;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "HINOKI_DATES_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// IANA zone whose calendar date counts as "today". Absent means the
    /// host's local date.
    pub timezone: Option<String>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub json: bool,
}

/// "Today" in a fixed IANA zone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock(pub Tz);

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.0).date_naive()
    }
}

impl Config {
    /// Load configuration with the resolution order:
    /// `--config` > `$HINOKI_DATES_CONFIG` > `<config dir>/hinoki/dates.toml` > defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .or_else(|| dirs::config_dir().map(|dir| dir.join("hinoki").join("dates.toml")));

        let Some(path) = path.filter(|p| p.exists()) else {
            log::debug!("no config file found, using defaults");
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.zone()?;
        Ok(config)
    }

    fn zone(&self) -> Result<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| anyhow::anyhow!("invalid timezone: '{name}'"))
            })
            .transpose()
    }

    /// The clock answering "today": a pinned date wins, then the configured
    /// zone, then the host's local date.
    pub fn clock(&self, pinned: Option<NaiveDate>) -> Result<Box<dyn Clock>> {
        if let Some(date) = pinned {
            return Ok(Box::new(FixedClock(date)));
        }
        Ok(match self.zone()? {
            Some(tz) => Box::new(ZonedClock(tz)),
            None => Box::new(SystemClock),
        })
    }
}
