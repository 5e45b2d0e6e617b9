//! Session commands and the notification surface.
//!
//! Every command either commits a mutation and notifies subscribers, or
//! leaves the session untouched and notifies nobody.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;

use quizzer_history::HistoryStore;
use quizzer_types::{Quiz, QuizResult, UserAnswer, View};

use crate::loader::{self, LoadError, QuizFile};
use crate::session::{AnswerReview, Attempt, Phase, SessionSnapshot, review_answers};
use crate::subscribers::SubscriptionId;
use crate::App;

impl App {
    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    /// An owned copy of the full session state.
    #[must_use]
    pub fn state(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.phase, &self.available)
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.phase.view()
    }

    #[must_use]
    pub fn available_quizzes(&self) -> &[QuizFile] {
        &self.available
    }

    #[must_use]
    pub fn history(&self) -> Option<&HistoryStore> {
        self.history.as_ref()
    }

    /// Register a callback run after every committed mutation.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&SessionSnapshot) + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(Box::new(callback))
    }

    /// Returns `false` if `id` was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Per-question review of the finished attempt; empty outside the
    /// results view.
    #[must_use]
    pub fn review(&self) -> Vec<AnswerReview<'_>> {
        match &self.phase {
            Phase::Results { attempt, .. } => review_answers(&attempt.quiz, &attempt.answers),
            Phase::Menu | Phase::Quiz(_) => Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Quiz flow
    // ------------------------------------------------------------------

    /// Begin a fresh attempt at `quiz`, abandoning any attempt in progress.
    pub fn start_quiz(&mut self, quiz: impl Into<Arc<Quiz>>) {
        let quiz = quiz.into();
        tracing::debug!(title = quiz.title(), "Starting quiz");
        self.phase = Phase::Quiz(Attempt::new(quiz));
        self.commit();
    }

    /// Start the `index`th available quiz. Returns `false` if there is none.
    pub fn start_available(&mut self, index: usize) -> bool {
        match self.available.get(index) {
            Some(file) => {
                let quiz = Arc::clone(&file.quiz);
                self.start_quiz(quiz);
                true
            }
            None => false,
        }
    }

    /// Select option `index` of the current question.
    ///
    /// Ignored outside the answering phase and for indices past the last
    /// option.
    pub fn select_answer(&mut self, index: usize) {
        let Phase::Quiz(attempt) = &mut self.phase else {
            return;
        };
        if attempt.show_explanation || index >= attempt.question().options().len() {
            return;
        }
        attempt.selected_answer = Some(index);
        self.commit();
    }

    /// Record the selected option and reveal the explanation.
    ///
    /// Ignored with nothing selected, and once the explanation is showing.
    pub fn submit_answer(&mut self) {
        let Phase::Quiz(attempt) = &mut self.phase else {
            return;
        };
        if attempt.show_explanation {
            return;
        }
        let Some(selected) = attempt.selected_answer else {
            return;
        };

        let answer = UserAnswer::new(
            attempt.current_question,
            selected,
            attempt.question().correct_answer(),
        );
        if answer.is_correct() {
            attempt.score += 1;
        }
        attempt.answers.push(answer);
        attempt.show_explanation = true;
        tracing::debug!(
            question = attempt.current_question,
            correct = answer.is_correct(),
            score = attempt.score,
            "Answer submitted"
        );
        self.commit();
    }

    /// Advance past the explanation, finishing the quiz after the last
    /// question.
    pub fn next_question(&mut self) {
        let Phase::Quiz(attempt) = &mut self.phase else {
            return;
        };
        if !attempt.show_explanation {
            return;
        }

        if attempt.has_next_question() {
            attempt.current_question += 1;
            attempt.selected_answer = None;
            attempt.show_explanation = false;
        } else {
            self.complete_quiz();
        }
        self.commit();
    }

    /// Restart the active quiz from its first question.
    pub fn reset_quiz(&mut self) {
        if let Some(attempt) = self.phase.attempt() {
            let quiz = Arc::clone(&attempt.quiz);
            self.start_quiz(quiz);
        }
    }

    /// Drop the active quiz, if any, and return to the menu.
    pub fn back_to_menu(&mut self) {
        self.phase = Phase::Menu;
        self.commit();
    }

    fn complete_quiz(&mut self) {
        let phase = std::mem::replace(&mut self.phase, Phase::Menu);
        let Phase::Quiz(mut attempt) = phase else {
            self.phase = phase;
            return;
        };

        attempt.selected_answer = None;
        attempt.show_explanation = false;
        let result = QuizResult::from_attempt(&attempt.quiz, attempt.answers.clone(), Utc::now());
        tracing::info!(
            title = %result.quiz_title,
            correct = result.correct_answers,
            total = result.total_questions,
            percentage = result.percentage,
            "Quiz completed"
        );
        self.record_result(&result);
        self.phase = Phase::Results { attempt, result };
    }

    fn record_result(&self, result: &QuizResult) {
        let Some(history) = &self.history else {
            return;
        };
        if let Err(e) = history.append(result) {
            tracing::warn!(
                path = %history.path().display(),
                "Failed to save quiz result: {e}"
            );
        }
    }

    // ------------------------------------------------------------------
    // Library
    // ------------------------------------------------------------------

    /// Replace the available quizzes with the bundled set followed by the
    /// library directory. Returns how many quizzes are now available.
    pub async fn load_local_quizzes(&mut self) -> usize {
        let mut quizzes = if self.library.include_bundled {
            loader::bundled_quizzes()
        } else {
            Vec::new()
        };
        if let Some(dir) = &self.library.dir {
            quizzes.extend(loader::load_quiz_dir(dir).await);
        }

        tracing::info!(count = quizzes.len(), "Loaded local quizzes");
        self.available = quizzes;
        self.commit();
        self.available.len()
    }

    /// Load a single quiz file without touching the session.
    pub async fn load_quiz_from_file(&self, path: &Path) -> Result<Arc<Quiz>, LoadError> {
        let quiz = loader::load_quiz_from_file(path).await.inspect_err(|e| {
            tracing::debug!(path = %path.display(), "Quiz file rejected: {e}");
        })?;
        Ok(Arc::new(quiz))
    }

    /// Load a quiz file and start it. On failure the session is unchanged.
    pub async fn import_quiz(&mut self, path: &Path) -> Result<Arc<Quiz>, LoadError> {
        let quiz = self.load_quiz_from_file(path).await?;
        self.start_quiz(Arc::clone(&quiz));
        Ok(quiz)
    }

    /// Offer another quiz in the menu, after the existing ones.
    pub fn add_quiz(&mut self, file: QuizFile) {
        self.available.push(file);
        self.commit();
    }

    fn commit(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.state();
        self.subscribers.publish(&snapshot);
    }
}
