use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::Theme;
use storage::repository::PreferenceRepository;

use crate::error::ThemeServiceError;

/// Preference key holding the dark-theme flag.
pub const THEME_DARK_KEY: &str = "ui.theme.dark";

/// Reads the theme once at startup and persists every change.
#[derive(Clone)]
pub struct ThemeService {
    clock: Clock,
    repo: Arc<dyn PreferenceRepository>,
}

impl ThemeService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { clock, repo }
    }

    /// Load the persisted theme (light if never set).
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` on storage failures.
    pub async fn load(&self) -> Result<Theme, ThemeServiceError> {
        let flag = self.repo.get_flag(THEME_DARK_KEY).await?;
        Ok(flag.map_or_else(Theme::default, Theme::from_dark_flag))
    }

    /// Persist `theme`.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` on storage failures.
    pub async fn save(&self, theme: Theme) -> Result<(), ThemeServiceError> {
        self.repo
            .set_flag(THEME_DARK_KEY, theme.is_dark(), self.clock.now())
            .await?;
        Ok(())
    }

    /// Flip `current`, persist the result and return it.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` on storage failures.
    pub async fn toggle(&self, current: Theme) -> Result<Theme, ThemeServiceError> {
        let next = current.toggled();
        self.save(next).await?;
        Ok(next)
    }
}
