//! Configuration loading for Quizzer.
//!
//! The config file is optional. When present it lives at
//! `~/.quizzer/config.toml`:
//!
//! ```toml
//! [library]
//! dir = "/home/me/quizzes"
//! include_bundled = true
//!
//! [history]
//! enabled = true
//! path = "/home/me/.local/share/quizzer/history.json"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR: &str = ".quizzer";
const CONFIG_FILE: &str = "config.toml";
const DATA_DIR_NAME: &str = "quizzer";
const HISTORY_FILE: &str = "history.json";
const LIBRARY_DIR: &str = "quizzes";

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizzerConfig {
    pub library: Option<LibraryConfig>,
    pub history: Option<HistoryConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Where quiz documents come from at startup.
#[derive(Debug, Deserialize)]
pub struct LibraryConfig {
    /// Extra directory scanned for `*.json` quiz documents.
    pub dir: Option<PathBuf>,
    /// Load the quizzes compiled into the binary.
    #[serde(default = "default_true")]
    pub include_bundled: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            dir: None,
            include_bundled: true,
        }
    }
}

/// Result log persistence.
#[derive(Debug, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub path: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl QuizzerConfig {
    /// Load the config from its default location.
    ///
    /// Returns `Ok(None)` when no config file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load the config from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(Some(config))
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolved library settings (defaults when the section is absent).
    #[must_use]
    pub fn library(&self) -> LibraryConfig {
        match &self.library {
            Some(library) => LibraryConfig {
                dir: library.dir.clone(),
                include_bundled: library.include_bundled,
            },
            None => LibraryConfig::default(),
        }
    }

    /// Resolved history settings (defaults when the section is absent).
    #[must_use]
    pub fn history(&self) -> HistoryConfig {
        match &self.history {
            Some(history) => HistoryConfig {
                enabled: history.enabled,
                path: history.path.clone(),
            },
            None => HistoryConfig::default(),
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDirSource {
    System,
    Fallback,
}

/// Directory holding the history log and the default quiz library.
#[derive(Debug, Clone)]
pub struct DataDir {
    pub path: PathBuf,
    pub source: DataDirSource,
}

impl DataDir {
    #[must_use]
    pub fn resolve() -> Self {
        match dirs::data_local_dir() {
            Some(path) => DataDir {
                path: path.join(DATA_DIR_NAME),
                source: DataDirSource::System,
            },
            None => DataDir {
                path: PathBuf::from(".").join(DATA_DIR_NAME),
                source: DataDirSource::Fallback,
            },
        }
    }

    #[must_use]
    pub fn join(&self, child: &str) -> PathBuf {
        self.path.join(child)
    }

    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        self.join(HISTORY_FILE)
    }

    #[must_use]
    pub fn library_dir(&self) -> PathBuf {
        self.join(LIBRARY_DIR)
    }
}
