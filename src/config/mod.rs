pub mod models;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, FileLoggingConfigItem, ScheduleDateConfigItem, SnapshotPathConfigItem,
    WeekStartConfigItem,
};
use crate::core::types::DayOfWeek;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    SnapshotPath,
    ScheduleDate,
    WeekStart,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub snapshot_path: SnapshotPathConfigItem,
    #[serde(default)]
    pub schedule_date: ScheduleDateConfigItem,
    #[serde(default)]
    pub week_start: WeekStartConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

/// (key, description, value) as shown by `config`.
pub type ConfigRow = (String, String, String);

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    last_change: Option<(String, String, String)>,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    pub fn snapshot_path(&self) -> &Path {
        self.data.snapshot_path.get_value()
    }
    pub fn schedule_date(&self) -> Option<NaiveDate> {
        *self.data.schedule_date.get_value()
    }
    pub fn week_start(&self) -> DayOfWeek {
        *self.data.week_start.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn value_string(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::SnapshotPath => self.snapshot_path().display().to_string(),
            ConfigKey::ScheduleDate => self
                .schedule_date()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            ConfigKey::WeekStart => self.week_start().to_string(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
        }
    }

    fn description(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::SnapshotPath => self.data.snapshot_path.description(),
            ConfigKey::ScheduleDate => self.data.schedule_date.description(),
            ConfigKey::WeekStart => self.data.week_start.description(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.description(),
        }
    }

    pub fn rows(&self) -> Vec<ConfigRow> {
        ConfigKey::iter()
            .map(|key| {
                (
                    key.to_string(),
                    self.description(key).to_string(),
                    self.value_string(key),
                )
            })
            .collect()
    }

    /// Validate, apply and write back. The old/new pair is kept for
    /// `take_last_change`.
    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.value_string(key);
        self.edit(|cfg| match key {
            ConfigKey::SnapshotPath => cfg.snapshot_path.set_value(new_value),
            ConfigKey::ScheduleDate => cfg.schedule_date.set_value(new_value),
            ConfigKey::WeekStart => cfg.week_start.set_value(new_value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(new_value),
        })?;
        self.last_change = Some((key.to_string(), old, self.value_string(key)));
        Ok(())
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut staged = self.data.clone();
        f(&mut staged)?;
        self.data = staged;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::Config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
