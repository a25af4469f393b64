use serde::{Deserialize, Serialize};
use serde_json::Value;

const PROMPT_KEYS: &[&str] = &["pergunta", "prompt", "question"];
const CHOICE_KEYS: &[&str] = &["alternativas", "choices", "options"];
const CORRECT_KEYS: &[&str] = &["gabarito", "correct_label", "answer"];
const EXPLANATION_KEYS: &[&str] = &["explicacao", "explanation"];

//
// ─── QUESTION RECORD ──────────────────────────────────────────────────────────
//

/// A single multiple-choice question in canonical shape.
///
/// Each choice carries its own label as its first character (e.g. `"A) Paris"`),
/// and `correct_label` names the label of the right choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_label: Option<char>,
    pub explanation: Option<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        correct_label: Option<char>,
        explanation: Option<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            choices,
            correct_label,
            explanation: explanation.filter(|text| !text.trim().is_empty()),
        }
    }

    /// Build a record from one element of a generation payload.
    ///
    /// Never fails: missing or ill-typed fields come back empty so that a malformed
    /// record shows up as a gap in the quiz instead of aborting the whole list.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let prompt = first_str(value, PROMPT_KEYS).unwrap_or_default().to_string();

        let choices = CHOICE_KEYS
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_array))
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let correct_label = first_str(value, CORRECT_KEYS).and_then(parse_label);
        let explanation = first_str(value, EXPLANATION_KEYS).map(str::to_string);

        Self::new(prompt, choices, correct_label, explanation)
    }

    /// True when exactly one choice carries `correct_label`.
    #[must_use]
    pub fn is_answerable(&self) -> bool {
        let Some(label) = self.correct_label else {
            return false;
        };
        self.choices
            .iter()
            .filter(|choice| choice_label(choice) == Some(label))
            .count()
            == 1
    }

    /// Whether a picked choice matches the correct label.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        match (choice_label(answer), self.correct_label) {
            (Some(picked), Some(expected)) => picked == expected,
            _ => false,
        }
    }

    /// The choice string that carries the correct label, if any.
    #[must_use]
    pub fn correct_choice(&self) -> Option<&str> {
        let label = self.correct_label?;
        self.choices
            .iter()
            .find(|choice| choice_label(choice) == Some(label))
            .map(String::as_str)
    }
}

/// Label of a choice: its first character.
#[must_use]
pub fn choice_label(choice: &str) -> Option<char> {
    choice.chars().next()
}

fn first_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
}

fn parse_label(raw: &str) -> Option<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(label), None) => Some(label),
        _ => None,
    }
}
