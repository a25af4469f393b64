mod quiz;
mod state;
mod theme_toggle;

pub use quiz::{GenerationForm, QuestionCard, QuestionNavigator, QuizPanel, QuizView, ResultsBanner};
pub use state::ViewError;
pub use theme_toggle::ThemeToggle;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
