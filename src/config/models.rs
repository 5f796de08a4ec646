use crate::core::types::{Bool, Date, DayOfWeek};
use crate::errors::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotPathConfigItem {
    pub value: PathBuf,
    pub description: String,
}
impl ConfigItem<PathBuf> for SnapshotPathConfigItem {
    fn get_value(&self) -> &PathBuf {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let trimmed = new_value.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse("Snapshot path cannot be empty.".into()));
        }
        self.value = PathBuf::from(trimmed);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDateConfigItem {
    pub value: Option<NaiveDate>,
    pub description: String,
}

impl Default for ScheduleDateConfigItem {
    fn default() -> Self {
        Self {
            value: None,
            description: "Date shown when no --date is given (empty = today).".into(),
        }
    }
}

impl ConfigItem<Option<NaiveDate>> for ScheduleDateConfigItem {
    fn get_value(&self) -> &Option<NaiveDate> {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        if new_value.trim().is_empty() || new_value.trim() == "-" {
            self.value = None;
            return Ok(());
        }
        let parsed = Date::try_from_str(new_value)?;
        self.value = Some(parsed.0);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekStartConfigItem {
    pub value: DayOfWeek,
    pub description: String,
}

impl Default for WeekStartConfigItem {
    fn default() -> Self {
        Self {
            value: DayOfWeek::Mon,
            description: "First day of the weekly client view.".into(),
        }
    }
}

impl ConfigItem<DayOfWeek> for WeekStartConfigItem {
    fn get_value(&self) -> &DayOfWeek {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = DayOfWeek::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
