use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::QuestionRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions loaded")]
    Empty,

    #[error("{missing} question(s) still unanswered")]
    Incomplete { missing: usize },

    #[error("results already revealed")]
    AlreadyRevealed,
}

/// Coarse lifecycle state of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    InProgress,
    Revealed,
}

/// Per-question status used by navigators and result listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Unanswered,
    Answered,
    Correct,
    Incorrect,
}

/// Snapshot of quiz progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub current: usize,
    pub is_complete: bool,
    pub revealed: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz over a fixed list of questions.
///
/// Answers are stored sparsely by question index as the exact choice string the
/// user picked. Scores are derived on read and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    answers: BTreeMap<usize, String>,
    current_index: usize,
    results_revealed: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session already loaded with `questions`.
    #[must_use]
    pub fn with_questions(questions: Vec<QuestionRecord>) -> Self {
        let mut session = Self::new();
        session.load(questions);
        session
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.questions.is_empty() {
            SessionState::Idle
        } else if self.results_revealed {
            SessionState::Revealed
        } else {
            SessionState::InProgress
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn results_revealed(&self) -> bool {
        self.results_revealed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    //
    // ─── TRANSITIONS ──────────────────────────────────────────────────────────
    //

    /// Replace the questions and start over.
    pub fn load(&mut self, questions: Vec<QuestionRecord>) {
        self.questions = questions;
        self.answers.clear();
        self.current_index = 0;
        self.results_revealed = false;
    }

    /// Record `choice` for the question at `index`.
    ///
    /// Ignored once results are revealed or when `index` is out of range.
    /// Returns `true` if the answer was stored.
    pub fn select_answer(&mut self, index: usize, choice: impl Into<String>) -> bool {
        if self.results_revealed || index >= self.questions.len() {
            return false;
        }
        self.answers.insert(index, choice.into());
        true
    }

    /// Lock in answers and show the score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` with no questions, `SessionError::Incomplete` while any
    /// question is unanswered, and `SessionError::AlreadyRevealed` on a second call.
    pub fn reveal(&mut self) -> Result<(), SessionError> {
        if self.questions.is_empty() {
            return Err(SessionError::Empty);
        }
        if self.results_revealed {
            return Err(SessionError::AlreadyRevealed);
        }
        let missing = self.unanswered_count();
        if missing > 0 {
            return Err(SessionError::Incomplete { missing });
        }

        self.results_revealed = true;
        self.current_index = 0;
        Ok(())
    }

    /// Clear answers and go back to the first question, keeping the questions.
    pub fn reset_answers(&mut self) {
        if self.questions.is_empty() {
            return;
        }
        self.answers.clear();
        self.current_index = 0;
        self.results_revealed = false;
    }

    /// Drop everything and return to `Idle`.
    pub fn clear(&mut self) {
        self.questions.clear();
        self.answers.clear();
        self.current_index = 0;
        self.results_revealed = false;
    }

    /// Jump to `index`. Out-of-range indices are rejected.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.questions.len() {
            return false;
        }
        self.current_index = index;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.current_index + 1 >= self.questions.len() {
            return false;
        }
        self.current_index += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.questions.len()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_index > 0
    }

    //
    // ─── DERIVED ──────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.questions.len().saturating_sub(self.answers.len())
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                self.answer(*index)
                    .is_some_and(|answer| question.is_correct(answer))
            })
            .count()
    }

    /// Answered questions that are not correct. Unanswered ones count for neither side.
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.answered_count().saturating_sub(self.correct_count())
    }

    /// Rounded percentage of correct answers; 0 for an empty quiz.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn score_percentage(&self) -> u32 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        let ratio = self.correct_count() as f64 / total as f64;
        (ratio * 100.0).round() as u32
    }

    /// True when every question has an answer. Always false for an empty quiz.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty()
            && (0..self.questions.len()).all(|index| self.answers.contains_key(&index))
    }

    #[must_use]
    pub fn question_status(&self, index: usize) -> QuestionStatus {
        let (Some(question), Some(answer)) = (self.questions.get(index), self.answer(index)) else {
            return QuestionStatus::Unanswered;
        };
        if !self.results_revealed {
            return QuestionStatus::Answered;
        }
        if question.is_correct(answer) {
            QuestionStatus::Correct
        } else {
            QuestionStatus::Incorrect
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.questions.len(),
            answered: self.answered_count(),
            current: self.current_index,
            is_complete: self.is_complete(),
            revealed: self.results_revealed,
        }
    }
}
