//! Quiz model: quizzes, questions, and recorded answers.

use serde::{Deserialize, Serialize};

use crate::NonEmptyString;
use crate::validate::{ValidationError, decode_quiz_document};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Menu,
    Quiz,
    Results,
}

/// A single multiple-choice question.
///
/// Only produced by [`decode_quiz_document`], so every value satisfies the
/// document shape: at least two non-blank options and an in-range correct index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    question: NonEmptyString,
    options: Vec<NonEmptyString>,
    correct_answer: usize,
    explanation: NonEmptyString,
}

impl QuizQuestion {
    pub(crate) fn from_parts(
        question: NonEmptyString,
        options: Vec<NonEmptyString>,
        correct_answer: usize,
        explanation: NonEmptyString,
    ) -> Self {
        debug_assert!(options.len() >= 2);
        debug_assert!(correct_answer < options.len());
        Self {
            question,
            options,
            correct_answer,
            explanation,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.question.as_str()
    }

    #[must_use]
    pub fn options(&self) -> &[NonEmptyString] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(NonEmptyString::as_str)
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        self.options[self.correct_answer].as_str()
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        self.explanation.as_str()
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }
}

/// A validated quiz. Immutable once loaded.
///
/// Deserializing goes through the structural validator, so a `Quiz` obtained
/// from serde is as trustworthy as one obtained from [`decode_quiz_document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Quiz {
    title: NonEmptyString,
    description: NonEmptyString,
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub(crate) fn from_parts(
        title: NonEmptyString,
        description: NonEmptyString,
        questions: Vec<QuizQuestion>,
    ) -> Self {
        debug_assert!(!questions.is_empty());
        Self {
            title,
            description,
            questions,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    /// Number of questions; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`: a decoded quiz has at least one question.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl TryFrom<serde_json::Value> for Quiz {
    type Error = ValidationError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        decode_quiz_document(Some(&value))
    }
}

/// The recorded answer to one question. Created once, at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    question_index: usize,
    selected_answer: usize,
    correct_answer: usize,
    is_correct: bool,
}

impl UserAnswer {
    #[must_use]
    pub fn new(question_index: usize, selected_answer: usize, correct_answer: usize) -> Self {
        Self {
            question_index,
            selected_answer,
            correct_answer,
            is_correct: selected_answer == correct_answer,
        }
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn selected_answer(&self) -> usize {
        self.selected_answer
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
