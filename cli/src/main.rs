//! Quizzer CLI - binary entry point.
//!
//! Bridges [`quizzer_engine`] (session state) and a line-based terminal front
//! end. `play` subscribes to session snapshots and redraws after each change;
//! `list`, `validate`, and `history` run once and exit.
//!
//! Logs never go to the terminal. They are appended to
//! `~/.quizzer/logs/quizzer.log` (or `./.quizzer/logs/quizzer.log`).

mod args;
mod commands;
mod play;
mod render;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use quizzer_engine::{App, QuizzerConfig};

use crate::args::{Cli, Command};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than interleave logs with quiz screens.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.quizzer/logs/quizzer.log
    if let Some(config_path) = QuizzerConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("quizzer.log"));
    }

    // Fallback: ./.quizzer/logs/quizzer.log
    candidates.push(PathBuf::from(".quizzer").join("logs").join("quizzer.log"));

    candidates
}

/// An explicit `--config` must load; the default location is best-effort.
fn load_config(explicit: Option<&PathBuf>) -> Result<Option<QuizzerConfig>> {
    if let Some(path) = explicit {
        let config = QuizzerConfig::load_from(path)?
            .with_context(|| format!("config file {} not found", path.display()))?;
        return Ok(Some(config));
    }

    match QuizzerConfig::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!(path = %e.path().display(), "Ignoring unreadable config: {e}");
            Ok(None)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let mut app = App::from_config(config.as_ref());
    let mut stdout = io::stdout();

    match cli.take_command() {
        Command::Play { file } => play::run(&mut app, file.as_deref()).await?,
        Command::List => commands::list(&mut app, &mut stdout).await?,
        Command::Validate { files } => {
            if !commands::validate(&files, &mut stdout).await? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::History { clear } => commands::history(&app, clear, &mut stdout)?,
    }

    Ok(ExitCode::SUCCESS)
}
