//! Non-interactive subcommands.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use quizzer_engine::App;
use quizzer_engine::loader::load_quiz_from_file;

use crate::render::history_line;

pub async fn list(app: &mut App, out: &mut impl Write) -> Result<()> {
    app.load_local_quizzes().await;
    if app.available_quizzes().is_empty() {
        writeln!(out, "No quizzes found.")?;
    }
    for file in app.available_quizzes() {
        writeln!(
            out,
            "{:<24} {} ({} questions)",
            file.filename,
            file.quiz.title(),
            file.quiz.len()
        )?;
    }
    Ok(())
}

/// Check each file, printing one line per file. Returns `true` if all passed.
pub async fn validate(files: &[PathBuf], out: &mut impl Write) -> Result<bool> {
    let mut all_valid = true;
    for path in files {
        match load_quiz_from_file(path).await {
            Ok(quiz) => writeln!(out, "{}: ok ({} questions)", path.display(), quiz.len())?,
            Err(e) => {
                all_valid = false;
                writeln!(out, "{}: {e}", path.display())?;
            }
        }
    }
    Ok(all_valid)
}

pub fn history(app: &App, clear: bool, out: &mut impl Write) -> Result<()> {
    let Some(store) = app.history() else {
        writeln!(out, "History is disabled.")?;
        return Ok(());
    };

    if clear {
        store.clear()?;
        writeln!(out, "History cleared.")?;
        return Ok(());
    }

    let log = store.load();
    if log.is_empty() {
        writeln!(out, "No completed quizzes yet.")?;
        return Ok(());
    }
    for result in log.newest_first() {
        writeln!(out, "{}", history_line(result))?;
    }
    tracing::debug!(path = %store.path().display(), entries = log.len(), "Listed history");
    Ok(())
}
