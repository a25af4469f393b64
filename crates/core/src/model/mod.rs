mod generation;
mod question;
mod theme;

pub use generation::{
    DEFAULT_QUESTION_COUNT, Difficulty, GenerationDraft, GenerationRequest,
    GenerationRequestError, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT,
};
pub use question::{QuestionRecord, choice_label};
pub use theme::Theme;
