//! Score bookkeeping across many answer patterns.

use quizzer_engine::View;

use crate::common::{answer, bare_app, quiz};

const KEY: [u64; 6] = [0, 1, 2, 2, 1, 0];

/// Every selection pattern over three options for a six-question quiz,
/// taken in steps so the test stays fast.
fn patterns() -> impl Iterator<Item = Vec<usize>> {
    (0..729_usize).step_by(7).map(|mut n| {
        (0..KEY.len())
            .map(|_| {
                let digit = n % 3;
                n /= 3;
                digit
            })
            .collect()
    })
}

#[test]
fn score_matches_correct_answers_at_every_step() {
    for selections in patterns() {
        let mut app = bare_app();
        app.start_quiz(quiz("Scoring", &KEY));

        for (answered, &selection) in selections.iter().enumerate() {
            answer(&mut app, selection);
            let state = app.state();
            let correct = state.user_answers.iter().filter(|a| a.is_correct()).count();
            assert_eq!(state.score, correct);
            assert_eq!(state.user_answers.len(), answered + 1);
        }
    }
}

#[test]
fn results_are_internally_consistent() {
    for selections in patterns() {
        let mut app = bare_app();
        app.start_quiz(quiz("Scoring", &KEY));
        for &selection in &selections {
            answer(&mut app, selection);
        }

        let state = app.state();
        assert_eq!(state.current_view, View::Results);
        let result = state.last_result.unwrap();

        let expected_correct = selections
            .iter()
            .zip(KEY)
            .filter(|(selected, key)| **selected as u64 == *key)
            .count();
        assert_eq!(result.correct_answers, expected_correct);
        assert_eq!(
            result.correct_answers + result.incorrect_answers,
            result.total_questions
        );
        let expected_pct = ((expected_correct as f64 / KEY.len() as f64) * 100.0).round() as u8;
        assert_eq!(result.percentage, expected_pct);
        assert_eq!(result.user_answers, state.user_answers);
    }
}

#[test]
fn answers_never_exceed_question_count() {
    let mut app = bare_app();
    app.start_quiz(quiz("Bounded", &[0, 0]));
    for _ in 0..5 {
        answer(&mut app, 0);
        app.submit_answer();
    }
    let state = app.state();
    assert_eq!(state.user_answers.len(), 2);
    assert_eq!(state.score, 2);
}
