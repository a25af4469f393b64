use std::ops::RangeInclusive;

use quiz_core::model::{Difficulty, GenerationDraft, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyOptionVm {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[must_use]
pub fn difficulty_options(selected: Difficulty) -> Vec<DifficultyOptionVm> {
    Difficulty::ALL
        .into_iter()
        .map(|level| DifficultyOptionVm {
            value: level.as_wire(),
            label: level.label(),
            selected: level == selected,
        })
        .collect()
}

#[must_use]
pub fn count_options() -> RangeInclusive<u32> {
    MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT
}

#[must_use]
pub fn can_submit(draft: &GenerationDraft, loading: bool) -> bool {
    !loading && draft.is_submittable()
}

#[must_use]
pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Generating..."
    } else {
        "Generate questions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_mark_current_difficulty() {
        let options = difficulty_options(Difficulty::Hard);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "FACIL");
        assert!(options[2].selected);
        assert!(!options[1].selected);
    }

    #[test]
    fn submit_requires_topic_and_idle() {
        let mut draft = GenerationDraft::default();
        assert!(!can_submit(&draft, false));
        draft.topic = "Chemistry".into();
        assert!(can_submit(&draft, false));
        assert!(!can_submit(&draft, true));
        assert_eq!(submit_label(true), "Generating...");
        assert_eq!(count_options().count(), 20);
    }
}
