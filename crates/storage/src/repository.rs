use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of a boolean preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRecord {
    pub key: String,
    pub enabled: bool,
    pub updated_at: DateTime<Utc>,
}

/// Repository contract for small local preferences keyed by name.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Fetch the stored record for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_preference(&self, key: &str) -> Result<Option<PreferenceRecord>, StorageError>;

    /// Insert or overwrite the flag stored under `key`.
    ///
    /// A write whose `updated_at` is older than the stored record is ignored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_flag(
        &self,
        key: &str,
        enabled: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// Convenience accessor for just the flag value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_flag(&self, key: &str) -> Result<Option<bool>, StorageError> {
        Ok(self.get_preference(key).await?.map(|record| record.enabled))
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    preferences: Arc<Mutex<HashMap<String, PreferenceRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            preferences: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryRepository {
    async fn get_preference(&self, key: &str) -> Result<Option<PreferenceRecord>, StorageError> {
        let guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_flag(
        &self,
        key: &str,
        enabled: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard
            .get(key)
            .is_some_and(|existing| existing.updated_at > updated_at)
        {
            return Ok(());
        }
        guard.insert(
            key.to_string(),
            PreferenceRecord {
                key: key.to_string(),
                enabled,
                updated_at,
            },
        );
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let preferences: Arc<dyn PreferenceRepository> = Arc::new(InMemoryRepository::new());
        Self { preferences }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::time::fixed_now;

    #[tokio::test]
    async fn missing_flag_is_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_flag("ui.theme.dark").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_flag_overwrites_previous_value() {
        let repo = InMemoryRepository::new();
        let now = fixed_now();
        repo.set_flag("ui.theme.dark", true, now).await.unwrap();
        repo.set_flag("ui.theme.dark", false, now + Duration::seconds(5))
            .await
            .unwrap();

        let record = repo.get_preference("ui.theme.dark").await.unwrap().unwrap();
        assert!(!record.enabled);
        assert_eq!(record.updated_at, now + Duration::seconds(5));
    }

    #[tokio::test]
    async fn stale_write_does_not_replace_newer_value() {
        let repo = InMemoryRepository::new();
        let now = fixed_now();
        repo.set_flag("ui.theme.dark", true, now + Duration::seconds(1))
            .await
            .unwrap();
        repo.set_flag("ui.theme.dark", false, now).await.unwrap();

        let record = repo.get_preference("ui.theme.dark").await.unwrap().unwrap();
        assert!(record.enabled);
        assert_eq!(record.updated_at, now + Duration::seconds(1));
    }

    #[tokio::test]
    async fn storage_clones_share_state() {
        let storage = Storage::in_memory();
        let other = storage.clone();
        storage
            .preferences
            .set_flag("ui.theme.dark", true, fixed_now())
            .await
            .unwrap();
        assert_eq!(other.preferences.get_flag("ui.theme.dark").await.unwrap(), Some(true));
    }
}
