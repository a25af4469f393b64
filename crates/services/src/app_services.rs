use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::generation_service::{GenerationConfig, GenerationService, QuestionSource};
use crate::quiz_loop::QuizLoopService;
use crate::theme_service::ThemeService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    quiz_loop: Arc<QuizLoopService>,
    theme: Arc<ThemeService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP generation endpoint.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the HTTP client
    /// cannot be built.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        generation: GenerationConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let generation = GenerationService::http(generation)?;
        Ok(Self::from_parts(&storage, clock, generation))
    }

    /// Build services over in-memory storage and an arbitrary question source.
    #[must_use]
    pub fn in_memory(clock: Clock, source: Arc<dyn QuestionSource>) -> Self {
        Self::from_parts(&Storage::in_memory(), clock, GenerationService::new(source))
    }

    #[must_use]
    pub fn from_parts(storage: &Storage, clock: Clock, generation: GenerationService) -> Self {
        let quiz_loop = Arc::new(QuizLoopService::new(generation));
        let theme = Arc::new(ThemeService::new(clock, Arc::clone(&storage.preferences)));
        Self { quiz_loop, theme }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}
