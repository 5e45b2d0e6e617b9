//! Core engine for Quizzer - quiz loading and the session state machine.
//!
//! This crate contains the [`App`] state machine without any presentation
//! dependencies. A front end drives it through commands and observes it
//! through [`SessionSnapshot`]s, either polled with [`App::state`] or pushed
//! to callbacks registered with [`App::subscribe`].

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

use std::path::PathBuf;

mod commands;
mod init;
pub mod loader;
mod session;
mod subscribers;

pub use init::AppOptions;
pub use loader::{LoadError, QuizFile};
pub use session::{AnswerReview, Progress, SessionSnapshot};
pub use subscribers::SubscriptionId;

// Re-export from crates for public API
pub use quizzer_config::{ConfigError, DataDir, DataDirSource, QuizzerConfig};
pub use quizzer_history::{HistoryError, HistoryLog, HistoryStore};
pub use quizzer_types::{
    Quiz, QuizQuestion, QuizResult, ScoreBand, ScoreSummary, UserAnswer, ValidationError, View,
};

use session::Phase;
use subscribers::Subscribers;

/// Where [`App::load_local_quizzes`] looks for quizzes.
#[derive(Debug, Clone)]
struct LibrarySource {
    include_bundled: bool,
    dir: Option<PathBuf>,
}

/// The quiz session: available quizzes, the current attempt, and the
/// subscribers watching it.
///
/// Commands issued in the wrong phase are ignored rather than rejected, so a
/// front end can forward every input event without checking state first.
#[derive(Debug)]
pub struct App {
    phase: Phase,
    available: Vec<QuizFile>,
    library: LibrarySource,
    history: Option<HistoryStore>,
    subscribers: Subscribers,
}
