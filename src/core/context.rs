use crate::config::Config;
use crate::core::snapshot::{Snapshot, load_snapshot_report};

use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub snapshot: Snapshot,
    pub logger: Logger,
    pub config_path: PathBuf,
    pub snapshot_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let snapshot_path = Self::resolve_snapshot_path(&config_path, config.snapshot_path());
        let loaded = load_snapshot_report(&snapshot_path)?;
        for record in &loaded.skipped {
            logger.warn(
                format!("Skipped snapshot record {record}"),
                LogTarget::FileOnly,
            );
        }
        let snapshot = loaded.snapshot;

        Ok(Self {
            config,
            snapshot,
            logger,
            config_path,
            snapshot_path,
            logs_dir,
        })
    }

    /// Relative snapshot paths are taken relative to the config file.
    fn resolve_snapshot_path(config_path: &Path, snapshot: &Path) -> PathBuf {
        if snapshot.is_absolute() {
            return snapshot.to_path_buf();
        }
        match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(snapshot),
            _ => snapshot.to_path_buf(),
        }
    }
}
