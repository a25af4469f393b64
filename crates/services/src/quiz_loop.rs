use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use quiz_core::QuizSession;
use quiz_core::model::{GenerationDraft, QuestionRecord};

use crate::error::GenerationError;
use crate::generation_service::GenerationService;

/// Orchestrates generation requests and (re)initializes quiz sessions.
///
/// At most one request is in flight at a time. A failed request never touches the
/// caller's session.
#[derive(Clone)]
pub struct QuizLoopService {
    generation: GenerationService,
    in_flight: Arc<AtomicBool>,
}

/// Clears the in-flight flag when the request finishes, however it finishes.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl QuizLoopService {
    #[must_use]
    pub fn new(generation: GenerationService) -> Self {
        Self {
            generation,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a generation request is currently running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate the form, request questions and normalize them.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Busy` while another request runs, `InvalidRequest` for a bad
    /// draft, and transport or payload errors from the generation service.
    pub async fn generate(
        &self,
        draft: GenerationDraft,
    ) -> Result<Vec<QuestionRecord>, GenerationError> {
        let result = self.generate_inner(draft).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "question generation failed; keeping current quiz");
        }
        result
    }

    async fn generate_inner(
        &self,
        draft: GenerationDraft,
    ) -> Result<Vec<QuestionRecord>, GenerationError> {
        let request = draft.validate()?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(GenerationError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        tracing::info!(
            topic = request.topic(),
            difficulty = request.difficulty().as_wire(),
            count = request.count(),
            "requesting generated questions"
        );
        let questions = self.generation.generate(&request).await?;
        tracing::info!(received = questions.len(), "generated questions ready");
        Ok(questions)
    }

    /// Generate questions and load them into `session`.
    ///
    /// On failure `session` is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Same as [`QuizLoopService::generate`].
    pub async fn generate_into(
        &self,
        session: &mut QuizSession,
        draft: GenerationDraft,
    ) -> Result<usize, GenerationError> {
        let questions = self.generate(draft).await?;
        let loaded = questions.len();
        session.load(questions);
        Ok(loaded)
    }
}
