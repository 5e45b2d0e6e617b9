//! Completed attempts flowing into the history log.

use quizzer_engine::HistoryStore;
use tempfile::tempdir;

use crate::common::{answer_all, app_with_history, quiz};

#[test]
fn each_completion_appends_one_result() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("history.json");
    let mut app = app_with_history(&path);

    app.start_quiz(quiz("First", &[0, 1]));
    answer_all(&mut app, &[0, 1]);
    app.reset_quiz();
    answer_all(&mut app, &[1, 1]);
    app.start_quiz(quiz("Second", &[2]));
    answer_all(&mut app, &[2]);

    let log = HistoryStore::new(&path).load();
    let titles: Vec<_> = log.results.iter().map(|r| r.quiz_title.as_str()).collect();
    assert_eq!(titles, ["First", "First", "Second"]);
    let percentages: Vec<_> = log.results.iter().map(|r| r.percentage).collect();
    assert_eq!(percentages, [100, 50, 100]);

    let newest: Vec<_> = log.newest_first().map(|r| r.quiz_title.as_str()).collect();
    assert_eq!(newest, ["Second", "First", "First"]);
}

#[test]
fn abandoned_attempts_are_not_recorded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut app = app_with_history(&path);

    app.start_quiz(quiz("Abandoned", &[0, 0]));
    answer_all(&mut app, &[0]);
    app.back_to_menu();

    assert!(HistoryStore::new(&path).load().is_empty());
}

#[test]
fn corrupt_log_is_replaced_on_next_completion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json at all").unwrap();
    let mut app = app_with_history(&path);

    app.start_quiz(quiz("Recovered", &[0]));
    answer_all(&mut app, &[0]);

    let log = HistoryStore::new(&path).load();
    assert_eq!(log.len(), 1);
    assert_eq!(log.results[0].quiz_title, "Recovered");
}

#[test]
fn persisted_layout_uses_camel_case_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut app = app_with_history(&path);
    app.start_quiz(quiz("Layout", &[1]));
    answer_all(&mut app, &[1]);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw["lastAccessed"].is_string());
    let result = &raw["results"][0];
    assert_eq!(result["quizTitle"], "Layout");
    assert_eq!(result["totalQuestions"], 1);
    assert_eq!(result["correctAnswers"], 1);
    assert_eq!(result["incorrectAnswers"], 0);
    assert_eq!(result["percentage"], 100);
    assert!(result["completedAt"].is_string());
    let answer = &result["userAnswers"][0];
    assert_eq!(answer["questionIndex"], 0);
    assert_eq!(answer["selectedAnswer"], 1);
    assert_eq!(answer["correctAnswer"], 1);
    assert_eq!(answer["isCorrect"], true);
}
