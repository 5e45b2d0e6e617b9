//! Session state machine types.
//!
//! The phase enum carries the active attempt only in the phases that have one,
//! so "a quiz is active iff the view is `quiz` or `results`" cannot be violated.

use std::sync::Arc;

use quizzer_types::{Quiz, QuizQuestion, QuizResult, UserAnswer, View};

use crate::loader::QuizFile;

/// One attempt at a single quiz.
#[derive(Debug, Clone)]
pub(crate) struct Attempt {
    pub(crate) quiz: Arc<Quiz>,
    /// Always within `0..quiz.len()`.
    pub(crate) current_question: usize,
    pub(crate) selected_answer: Option<usize>,
    /// Set by submission, cleared by advancing.
    pub(crate) show_explanation: bool,
    /// One entry per submitted question, in order.
    pub(crate) answers: Vec<UserAnswer>,
    /// Count of correct entries in `answers`.
    pub(crate) score: usize,
}

impl Attempt {
    pub(crate) fn new(quiz: Arc<Quiz>) -> Self {
        Self {
            quiz,
            current_question: 0,
            selected_answer: None,
            show_explanation: false,
            answers: Vec::new(),
            score: 0,
        }
    }

    pub(crate) fn question(&self) -> &QuizQuestion {
        &self.quiz.questions()[self.current_question]
    }

    pub(crate) fn has_next_question(&self) -> bool {
        self.current_question + 1 < self.quiz.len()
    }
}

#[derive(Debug)]
pub(crate) enum Phase {
    Menu,
    /// Answering (`show_explanation == false`) or explaining.
    Quiz(Attempt),
    /// Finished attempt, kept for review alongside its result.
    Results { attempt: Attempt, result: QuizResult },
}

impl Phase {
    pub(crate) fn view(&self) -> View {
        match self {
            Phase::Menu => View::Menu,
            Phase::Quiz(_) => View::Quiz,
            Phase::Results { .. } => View::Results,
        }
    }

    pub(crate) fn attempt(&self) -> Option<&Attempt> {
        match self {
            Phase::Menu => None,
            Phase::Quiz(attempt) | Phase::Results { attempt, .. } => Some(attempt),
        }
    }

    pub(crate) fn result(&self) -> Option<&QuizResult> {
        match self {
            Phase::Results { result, .. } => Some(result),
            Phase::Menu | Phase::Quiz(_) => None,
        }
    }
}

/// Immutable copy of the full session state, handed to subscribers.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub current_view: View,
    pub available_quizzes: Vec<QuizFile>,
    pub current_quiz: Option<Arc<Quiz>>,
    pub current_question_index: usize,
    pub selected_answer: Option<usize>,
    pub show_explanation: bool,
    pub user_answers: Vec<UserAnswer>,
    pub score: usize,
    /// Result of the attempt just completed; present in the results view.
    pub last_result: Option<QuizResult>,
}

impl SessionSnapshot {
    pub(crate) fn capture(phase: &Phase, available: &[QuizFile]) -> Self {
        let attempt = phase.attempt();
        Self {
            current_view: phase.view(),
            available_quizzes: available.to_vec(),
            current_quiz: attempt.map(|a| Arc::clone(&a.quiz)),
            current_question_index: attempt.map_or(0, |a| a.current_question),
            selected_answer: attempt.and_then(|a| a.selected_answer),
            show_explanation: attempt.is_some_and(|a| a.show_explanation),
            user_answers: attempt.map(|a| a.answers.clone()).unwrap_or_default(),
            score: attempt.map_or(0, |a| a.score),
            last_result: phase.result().cloned(),
        }
    }

    /// The question currently on screen, if a quiz is active.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current_quiz
            .as_ref()
            .and_then(|quiz| quiz.question(self.current_question_index))
    }

    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        let quiz = self.current_quiz.as_ref()?;
        Some(Progress {
            question_number: self.current_question_index + 1,
            total_questions: quiz.len(),
            score: self.score,
            answered: self.user_answers.len(),
        })
    }

    /// Per-answer review of the attempt, in answer order.
    #[must_use]
    pub fn review(&self) -> Vec<AnswerReview<'_>> {
        match &self.current_quiz {
            Some(quiz) => review_answers(quiz, &self.user_answers),
            None => Vec::new(),
        }
    }
}

/// "Question n of total" plus the running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based.
    pub question_number: usize,
    pub total_questions: usize,
    pub score: usize,
    pub answered: usize,
}

/// One answered question, paired with the question it answers.
#[derive(Debug, Clone, Copy)]
pub struct AnswerReview<'a> {
    pub question: &'a QuizQuestion,
    pub answer: UserAnswer,
}

impl AnswerReview<'_> {
    #[must_use]
    pub fn prompt(&self) -> &str {
        self.question.prompt()
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        self.question.correct_option()
    }

    /// The option the user picked, only when it was wrong.
    #[must_use]
    pub fn wrong_option(&self) -> Option<&str> {
        if self.answer.is_correct() {
            None
        } else {
            self.question.option(self.answer.selected_answer())
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.answer.is_correct()
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        self.question.explanation()
    }
}

pub(crate) fn review_answers<'a>(quiz: &'a Quiz, answers: &[UserAnswer]) -> Vec<AnswerReview<'a>> {
    answers
        .iter()
        .filter_map(|answer| {
            quiz.question(answer.question_index())
                .map(|question| AnswerReview {
                    question,
                    answer: *answer,
                })
        })
        .collect()
}
