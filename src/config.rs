use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::accounts::DEFAULT_HASH_COST;
use crate::session::{Difficulty, SessionConfig, TestDuration};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// menu default for the duration question
    pub duration: String,
    /// menu default for the difficulty question
    pub difficulty: String,
    pub record_history: bool,
    pub password_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: TestDuration::HalfMinute.to_string(),
            difficulty: Difficulty::BasicSentences.to_string(),
            record_history: true,
            password_cost: DEFAULT_HASH_COST,
        }
    }
}

impl Config {
    /// Remember the choices of a session as the next menu defaults
    pub fn remember(&mut self, session: &SessionConfig) {
        self.duration = session.duration.to_string();
        self.difficulty = session.difficulty.to_string();
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> crate::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "wpm-drill") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("wpm_drill_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "unreadable config, using defaults"
                );
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
