//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use quizzer_engine::loader::parse_quiz;
use quizzer_engine::{App, AppOptions, HistoryStore, Quiz};
use serde_json::{Value, json};

/// A quiz document with one three-option question per entry in `correct`.
pub fn quiz_document(title: &str, correct: &[u64]) -> Value {
    let questions: Vec<_> = correct
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            json!({
                "question": format!("{title} question {}", i + 1),
                "options": ["first", "second", "third"],
                "correctAnswer": answer,
                "explanation": format!("The answer is option {answer}.")
            })
        })
        .collect();
    json!({
        "title": title,
        "description": format!("{title} description"),
        "questions": questions
    })
}

pub fn quiz(title: &str, correct: &[u64]) -> Arc<Quiz> {
    Arc::new(parse_quiz(&quiz_document(title, correct).to_string()).expect("valid quiz"))
}

/// An app with no quiz sources and no history.
pub fn bare_app() -> App {
    App::new(AppOptions {
        include_bundled: false,
        library_dir: None,
        history: None,
    })
}

pub fn app_with_history(path: &Path) -> App {
    App::new(AppOptions {
        include_bundled: false,
        library_dir: None,
        history: Some(HistoryStore::new(path)),
    })
}

/// Select and submit `selection` for the current question, then advance.
pub fn answer(app: &mut App, selection: usize) {
    app.select_answer(selection);
    app.submit_answer();
    app.next_question();
}

/// Play through the active quiz with the given selections, in order.
pub fn answer_all(app: &mut App, selections: &[usize]) {
    for &selection in selections {
        answer(app, selection);
    }
}

pub fn write_quiz(dir: &Path, filename: &str, document: &Value) {
    std::fs::write(dir.join(filename), document.to_string()).expect("write quiz file");
}
