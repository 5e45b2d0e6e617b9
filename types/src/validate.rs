//! Structural validation of untrusted quiz documents.
//!
//! A document is decoded into a typed [`Quiz`] or rejected with the first
//! violation found. Checks run in a fixed precedence order and stop at the
//! first failure, so the reported message is stable for a given document:
//!
//! 1. document present
//! 2. `title`, then `description`, each a non-blank string
//! 3. `questions` a non-empty array
//! 4. per question, in index order: `question`, `options` (at least two, each
//!    a non-blank string), `correctAnswer` (a number, in range), `explanation`
//!
//! Only shape is checked. Duplicate options or nonsensical text are accepted.

use std::num::FpCategory;

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::NonEmptyString;
use crate::quiz::{Quiz, QuizQuestion};

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// Why a quiz document was rejected.
///
/// Question and option numbers are 1-based, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid JSON file! Please check your file format and try again.")]
    MissingDocument,
    #[error("Quiz must have a non-empty title.")]
    Title,
    #[error("Quiz must have a non-empty description.")]
    Description,
    #[error("Quiz must have at least one question.")]
    NoQuestions,
    #[error("Question {question} must have a non-empty question text.")]
    QuestionText { question: usize },
    #[error("Question {question} must have at least 2 options.")]
    TooFewOptions { question: usize },
    #[error("Question {question} option {option} must be a non-empty string.")]
    BlankOption { question: usize, option: usize },
    #[error("Question {question} correctAnswer must be a number.")]
    CorrectAnswerNotNumber { question: usize },
    #[error("Question {question} correctAnswer index must be between 0 and {max}.")]
    CorrectAnswerOutOfRange { question: usize, max: usize },
    #[error("Question {question} must have a non-empty explanation.")]
    Explanation { question: usize },
}

/// Check a document against the quiz shape without keeping the decoded value.
pub fn validate_quiz_document(document: Option<&Value>) -> Result<(), ValidationError> {
    decode_quiz_document(document).map(|_| ())
}

/// Decode a document into a [`Quiz`], or report the first violation.
///
/// `None` counts as an absent document, and so do the empty JSON values
/// `null`, `false`, `0` and `""`.
pub fn decode_quiz_document(document: Option<&Value>) -> Result<Quiz, ValidationError> {
    let document = match document {
        Some(value) if !is_empty_value(value) => value,
        _ => return Err(ValidationError::MissingDocument),
    };
    let fields = document.as_object();

    let title = non_blank(fields, "title").ok_or(ValidationError::Title)?;
    let description = non_blank(fields, "description").ok_or(ValidationError::Description)?;

    let entries = fields
        .and_then(|f| f.get("questions"))
        .and_then(Value::as_array)
        .filter(|entries| !entries.is_empty())
        .ok_or(ValidationError::NoQuestions)?;

    let questions = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_question(entry, index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Quiz::from_parts(title, description, questions))
}

fn decode_question(entry: &Value, number: usize) -> Result<QuizQuestion, ValidationError> {
    let fields = entry.as_object();

    let question = non_blank(fields, "question")
        .ok_or(ValidationError::QuestionText { question: number })?;

    let raw_options = fields
        .and_then(|f| f.get("options"))
        .and_then(Value::as_array)
        .filter(|options| options.len() >= MIN_OPTIONS)
        .ok_or(ValidationError::TooFewOptions { question: number })?;

    let options = raw_options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            option
                .as_str()
                .and_then(|text| NonEmptyString::new(text).ok())
                .ok_or(ValidationError::BlankOption {
                    question: number,
                    option: index + 1,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let correct_answer = match fields.and_then(|f| f.get("correctAnswer")) {
        Some(Value::Number(n)) => n,
        _ => return Err(ValidationError::CorrectAnswerNotNumber { question: number }),
    };
    let correct_answer = option_index(correct_answer, options.len()).ok_or(
        ValidationError::CorrectAnswerOutOfRange {
            question: number,
            max: options.len() - 1,
        },
    )?;

    let explanation = non_blank(fields, "explanation")
        .ok_or(ValidationError::Explanation { question: number })?;

    Ok(QuizQuestion::from_parts(
        question,
        options,
        correct_answer,
        explanation,
    ))
}

/// The option named by `n`, if it is a whole number below `len`.
///
/// Whole-valued floats (`1.0`, `1e0`, `-0`) name an option just like integers.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn option_index(n: &Number, len: usize) -> Option<usize> {
    if let Some(index) = n.as_u64() {
        return usize::try_from(index).ok().filter(|index| *index < len);
    }
    let value = n.as_f64()?;
    if !value.is_finite() || value < 0.0 || value.fract() > 0.0 || value >= len as f64 {
        return None;
    }
    Some(value as usize)
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64().is_some_and(|v| v.classify() == FpCategory::Zero),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn non_blank(fields: Option<&Map<String, Value>>, key: &str) -> Option<NonEmptyString> {
    fields
        .and_then(|f| f.get(key))
        .and_then(Value::as_str)
        .and_then(|text| NonEmptyString::new(text).ok())
}
