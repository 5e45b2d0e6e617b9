//! Quiz discovery and single-file import.

use quizzer_engine::loader::{bundled_quizzes, load_documents};
use quizzer_engine::{App, AppOptions, LoadError, ValidationError, View};
use serde_json::json;
use tempfile::tempdir;

use crate::common::{bare_app, quiz_document, write_quiz};

#[test]
fn batch_skips_document_missing_title() {
    let mut untitled = quiz_document("Untitled", &[0]);
    untitled.as_object_mut().unwrap().remove("title");

    let batch = [
        ("one.json", Ok(quiz_document("One", &[0]).to_string())),
        ("two.json", Ok(untitled.to_string())),
        ("three.json", Ok(quiz_document("Three", &[1]).to_string())),
    ];
    let loaded = load_documents(batch);

    let titles: Vec<_> = loaded.iter().map(|f| f.quiz.title()).collect();
    assert_eq!(titles, ["One", "Three"]);
}

#[tokio::test]
async fn library_directory_loads_in_filename_order() {
    let dir = tempdir().unwrap();
    write_quiz(dir.path(), "20-later.json", &quiz_document("Later", &[0]));
    write_quiz(dir.path(), "10-earlier.json", &quiz_document("Earlier", &[0]));
    write_quiz(dir.path(), "15-broken.json", &json!({"title": "Broken"}));

    let mut app = App::new(AppOptions {
        include_bundled: false,
        library_dir: Some(dir.path().to_path_buf()),
        history: None,
    });
    assert_eq!(app.load_local_quizzes().await, 2);

    let names: Vec<_> = app
        .available_quizzes()
        .iter()
        .map(|f| f.filename.as_str())
        .collect();
    assert_eq!(names, ["10-earlier.json", "20-later.json"]);
}

#[tokio::test]
async fn reloading_replaces_available_quizzes() {
    let mut app = App::new(AppOptions::default());
    app.load_local_quizzes().await;
    app.load_local_quizzes().await;
    assert_eq!(app.available_quizzes().len(), bundled_quizzes().len());
}

#[tokio::test]
async fn malformed_file_reports_generic_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    std::fs::write(&path, "title: nope").unwrap();

    let err = bare_app().load_quiz_from_file(&path).await.unwrap_err();
    assert!(matches!(err, LoadError::MalformedInput(_)));
    assert_eq!(
        err.to_string(),
        "Invalid JSON file! Please check your file format and try again."
    );
}

#[tokio::test]
async fn invalid_file_reports_validator_message() {
    let dir = tempdir().unwrap();
    let mut document = quiz_document("Bad", &[0, 0]);
    document["questions"][1]["correctAnswer"] = json!(5);
    write_quiz(dir.path(), "bad.json", &document);

    let err = bare_app()
        .load_quiz_from_file(&dir.path().join("bad.json"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::InvalidQuiz(ValidationError::CorrectAnswerOutOfRange { question: 2, max: 2 })
    ));
    assert_eq!(
        err.to_string(),
        "Question 2 correctAnswer index must be between 0 and 2."
    );
}

#[tokio::test]
async fn imported_quiz_can_be_kept_in_menu() {
    let dir = tempdir().unwrap();
    write_quiz(dir.path(), "mine.json", &quiz_document("Mine", &[1]));
    let path = dir.path().join("mine.json");

    let mut app = bare_app();
    let quiz = app.import_quiz(&path).await.unwrap();
    app.add_quiz(quizzer_engine::QuizFile::new("mine.json", quiz));

    let state = app.state();
    assert_eq!(state.current_view, View::Quiz);
    assert_eq!(state.available_quizzes.len(), 1);
    assert_eq!(state.available_quizzes[0].quiz.title(), "Mine");
}
