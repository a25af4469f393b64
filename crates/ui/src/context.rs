use std::sync::Arc;

use quiz_core::model::Theme;
use services::{QuizLoopService, ThemeService};

pub trait UiApp: Send + Sync {
    fn initial_theme(&self) -> Theme;

    fn quiz_loop(&self) -> Arc<QuizLoopService>;
    fn theme_service(&self) -> Arc<ThemeService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_theme: Theme,
    quiz_loop: Arc<QuizLoopService>,
    theme_service: Arc<ThemeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_theme: app.initial_theme(),
            quiz_loop: app.quiz_loop(),
            theme_service: app.theme_service(),
        }
    }

    /// Theme read from storage at startup.
    #[must_use]
    pub fn initial_theme(&self) -> Theme {
        self.initial_theme
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn theme_service(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
