use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest number of questions a single request may ask for.
pub const MIN_QUESTION_COUNT: u32 = 1;
/// Largest number of questions a single request may ask for.
pub const MAX_QUESTION_COUNT: u32 = 20;
/// Question count preselected in a fresh form.
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationRequestError {
    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("question count {count} is outside 1..=20")]
    CountOutOfRange { count: u32 },

    #[error("unknown difficulty: {raw}")]
    UnknownDifficulty { raw: String },
}

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Difficulty level understood by the generation service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "FACIL")]
    Easy,
    #[default]
    #[serde(rename = "MEDIO")]
    Medium,
    #[serde(rename = "DIFICIL")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Value sent on the wire.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Difficulty::Easy => "FACIL",
            Difficulty::Medium => "MEDIO",
            Difficulty::Hard => "DIFICIL",
        }
    }

    /// Parse a wire value back into a difficulty.
    ///
    /// # Errors
    ///
    /// Returns `GenerationRequestError::UnknownDifficulty` for anything else.
    pub fn from_wire(raw: &str) -> Result<Self, GenerationRequestError> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_wire() == raw)
            .ok_or_else(|| GenerationRequestError::UnknownDifficulty {
                raw: raw.to_string(),
            })
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── REQUEST ──────────────────────────────────────────────────────────────────
//

/// Raw form fields for a generation request, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationDraft {
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: u32,
}

impl Default for GenerationDraft {
    fn default() -> Self {
        Self {
            topic: String::new(),
            difficulty: Difficulty::default(),
            count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl GenerationDraft {
    #[must_use]
    pub fn new(topic: impl Into<String>, difficulty: Difficulty, count: u32) -> Self {
        Self {
            topic: topic.into(),
            difficulty,
            count,
        }
    }

    /// Cheap check used to enable the submit control.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.topic.trim().is_empty()
    }

    /// Validate and normalize the draft into a request body.
    ///
    /// # Errors
    ///
    /// Returns `GenerationRequestError` if the topic is blank or the count is out of range.
    pub fn validate(self) -> Result<GenerationRequest, GenerationRequestError> {
        let topic = self.topic.trim().to_string();
        if topic.is_empty() {
            return Err(GenerationRequestError::EmptyTopic);
        }
        if !(MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(&self.count) {
            return Err(GenerationRequestError::CountOutOfRange { count: self.count });
        }

        Ok(GenerationRequest {
            difficulty: self.difficulty,
            count: self.count,
            topic,
        })
    }
}

/// Validated body of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    #[serde(rename = "dificuldade_da_pergunta")]
    difficulty: Difficulty,
    #[serde(rename = "quantidade_de_perguntas")]
    count: u32,
    #[serde(rename = "tema_das_perguntas")]
    topic: String,
}

impl GenerationRequest {
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }
}
