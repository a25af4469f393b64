mod form_vm;
mod quiz_vm;

pub use form_vm::{DifficultyOptionVm, can_submit, count_options, difficulty_options, submit_label};
pub use quiz_vm::{ChoiceState, ChoiceVm, NavDotVm, QuestionVm, QuizVm, ScoreVm, map_quiz};
