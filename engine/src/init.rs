//! Application initialization for the App.

use std::path::PathBuf;

use quizzer_config::{DataDir, DataDirSource, QuizzerConfig};
use quizzer_history::HistoryStore;

use crate::session::Phase;
use crate::subscribers::Subscribers;
use crate::{App, LibrarySource};

/// Construction options for [`App::new`].
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Offer the quizzes compiled into the binary.
    pub include_bundled: bool,
    /// Extra directory of `*.json` quiz documents.
    pub library_dir: Option<PathBuf>,
    /// Where completed results go; `None` disables history.
    pub history: Option<HistoryStore>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            include_bundled: true,
            library_dir: None,
            history: None,
        }
    }
}

impl App {
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        Self {
            phase: Phase::Menu,
            available: Vec::new(),
            library: LibrarySource {
                include_bundled: options.include_bundled,
                dir: options.library_dir,
            },
            history: options.history,
            subscribers: Subscribers::default(),
        }
    }

    /// Build an app from the user's config file, falling back to defaults
    /// under the data directory for anything left unset.
    #[must_use]
    pub fn from_config(config: Option<&QuizzerConfig>) -> Self {
        Self::new(Self::options_from_config(config, &DataDir::resolve()))
    }

    pub(crate) fn options_from_config(
        config: Option<&QuizzerConfig>,
        data_dir: &DataDir,
    ) -> AppOptions {
        if data_dir.source == DataDirSource::Fallback {
            tracing::warn!(
                path = %data_dir.path.display(),
                "No system data directory; using fallback"
            );
        }

        let library = config.map(QuizzerConfig::library).unwrap_or_default();
        let history = config.map(QuizzerConfig::history).unwrap_or_default();

        // The default library is optional; only an explicit one is always scanned.
        let library_dir = library.dir.or_else(|| {
            let default = data_dir.library_dir();
            default.is_dir().then_some(default)
        });

        let history = history.enabled.then(|| {
            HistoryStore::new(history.path.unwrap_or_else(|| data_dir.history_path()))
        });

        AppOptions {
            include_bundled: library.include_bundled,
            library_dir,
            history,
        }
    }
}
