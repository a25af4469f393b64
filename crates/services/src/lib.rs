#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod generation_service;
pub mod quiz_loop;
pub mod theme_service;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, GenerationError, ThemeServiceError};
pub use generation_service::{
    DEFAULT_BASE_URL, GENERATION_PATH, GenerationConfig, GenerationService, HttpQuestionSource,
    QuestionSource,
};
pub use quiz_loop::QuizLoopService;
pub use theme_service::{THEME_DARK_KEY, ThemeService};
