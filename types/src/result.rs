//! Completed-attempt results and score grading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::{Quiz, UserAnswer};

/// Integer percentage of `correct` out of `total`, rounded half up.
///
/// Returns 0 for an empty total; a decoded quiz never has one.
#[must_use]
pub fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    // round(correct / total * 100) without going through floats
    let rounded = (correct * 200 + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// Snapshot of a finished attempt, appended once to the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_title: String,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub percentage: u8,
    pub user_answers: Vec<UserAnswer>,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    /// Score a finished attempt at `quiz`.
    #[must_use]
    pub fn from_attempt(
        quiz: &Quiz,
        user_answers: Vec<UserAnswer>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let total_questions = quiz.len();
        let correct_answers = user_answers.iter().filter(|a| a.is_correct()).count();
        Self {
            quiz_title: quiz.title().to_string(),
            total_questions,
            correct_answers,
            incorrect_answers: total_questions.saturating_sub(correct_answers),
            percentage: percentage(correct_answers, total_questions),
            user_answers,
            completed_at,
        }
    }

    #[must_use]
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.correct_answers, self.total_questions)
    }
}

/// Grade shown alongside a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Excellent,
    Great,
    Good,
    Fair,
    NeedsPractice,
}

impl ScoreBand {
    #[must_use]
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            90..=u8::MAX => Self::Excellent,
            80..=89 => Self::Great,
            70..=79 => Self::Good,
            60..=69 => Self::Fair,
            _ => Self::NeedsPractice,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work!",
            Self::Great => "Great job!",
            Self::Good => "Good effort!",
            Self::Fair => "Not bad, keep studying!",
            Self::NeedsPractice => "Keep practicing!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
    pub band: ScoreBand,
}

impl ScoreSummary {
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            band: ScoreBand::for_percentage(percentage),
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.band.message()
    }
}
