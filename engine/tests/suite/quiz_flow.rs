//! Walkthroughs of the session state machine.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use quizzer_engine::{SessionSnapshot, View};

use crate::common::{answer, answer_all, bare_app, quiz};

#[test]
fn two_question_walkthrough() {
    let mut app = bare_app();
    let snapshots: Rc<RefCell<Vec<SessionSnapshot>>> = Rc::default();
    let sink = Rc::clone(&snapshots);
    app.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    app.start_quiz(quiz("Walkthrough", &[1, 0]));
    app.select_answer(1);
    app.submit_answer();
    {
        let state = app.state();
        assert!(state.show_explanation);
        assert_eq!(state.score, 1);
        assert!(state.user_answers[0].is_correct());
    }
    app.next_question();
    app.select_answer(2);
    app.submit_answer();
    assert_eq!(app.state().score, 1);
    app.next_question();

    let state = app.state();
    assert_eq!(state.current_view, View::Results);
    let result = state.last_result.expect("result after completion");
    assert_eq!(result.total_questions, 2);
    assert_eq!(result.correct_answers, 1);
    assert_eq!(result.incorrect_answers, 1);
    assert_eq!(result.percentage, 50);
    assert_eq!(result.summary().message(), "Keep practicing!");

    // start, select, submit, next, select, submit, next
    let views: Vec<_> = snapshots.borrow().iter().map(|s| s.current_view).collect();
    assert_eq!(
        views,
        [
            View::Quiz,
            View::Quiz,
            View::Quiz,
            View::Quiz,
            View::Quiz,
            View::Quiz,
            View::Results
        ]
    );
}

#[test]
fn reselecting_before_submit_keeps_last_choice() {
    let mut app = bare_app();
    app.start_quiz(quiz("Reselect", &[1]));
    app.select_answer(0);
    app.select_answer(1);
    app.submit_answer();

    let state = app.state();
    assert_eq!(state.user_answers.len(), 1);
    assert_eq!(state.user_answers[0].selected_answer(), 1);
    assert_eq!(state.score, 1);
}

#[test]
fn back_to_menu_mid_quiz_clears_attempt() {
    let mut app = bare_app();
    app.start_quiz(quiz("Abandon", &[0, 0, 0]));
    answer(&mut app, 0);
    app.select_answer(2);

    app.back_to_menu();

    let state = app.state();
    assert_eq!(state.current_view, View::Menu);
    assert!(state.current_quiz.is_none());
    assert_eq!(state.current_question_index, 0);
    assert_eq!(state.selected_answer, None);
    assert!(state.user_answers.is_empty());
    assert_eq!(state.score, 0);
    assert!(state.last_result.is_none());
}

#[test]
fn reset_restarts_same_quiz_object() {
    let mut app = bare_app();
    let quiz = quiz("Reset", &[2, 1]);
    app.start_quiz(Arc::clone(&quiz));
    answer(&mut app, 2);

    app.reset_quiz();

    let state = app.state();
    assert_eq!(state.current_view, View::Quiz);
    assert!(Arc::ptr_eq(state.current_quiz.as_ref().unwrap(), &quiz));
    assert_eq!(state.current_question_index, 0);
    assert!(state.user_answers.is_empty());
    assert_eq!(state.score, 0);
}

#[test]
fn reset_then_replay_reproduces_attempt() {
    let selections = [2, 0, 1, 1];
    let mut app = bare_app();
    app.start_quiz(quiz("Replay", &[2, 1, 1, 0]));

    answer_all(&mut app, &selections);
    let first = app.state();

    app.reset_quiz();
    answer_all(&mut app, &selections);
    let second = app.state();

    assert_eq!(first.current_view, View::Results);
    assert_eq!(second.current_view, View::Results);
    assert_eq!(first.score, second.score);
    assert_eq!(first.user_answers, second.user_answers);
    let (first, second) = (first.last_result.unwrap(), second.last_result.unwrap());
    assert_eq!(first.correct_answers, second.correct_answers);
    assert_eq!(first.percentage, second.percentage);
}

#[test]
fn reset_from_results_starts_over() {
    let mut app = bare_app();
    app.start_quiz(quiz("Again", &[0]));
    answer(&mut app, 1);
    assert_eq!(app.view(), View::Results);

    app.reset_quiz();

    let state = app.state();
    assert_eq!(state.current_view, View::Quiz);
    assert!(state.user_answers.is_empty());
    assert!(state.last_result.is_none());
}

#[test]
fn active_quiz_present_only_in_quiz_and_results() {
    let mut app = bare_app();
    let check = |app: &quizzer_engine::App| {
        let state = app.state();
        let active = state.current_quiz.is_some();
        assert_eq!(
            active,
            matches!(state.current_view, View::Quiz | View::Results),
            "view {:?}",
            state.current_view
        );
    };

    check(&app);
    app.start_quiz(quiz("Invariant", &[0]));
    check(&app);
    app.select_answer(0);
    app.submit_answer();
    check(&app);
    app.next_question();
    check(&app);
    app.back_to_menu();
    check(&app);
}
