use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::repository::{PreferenceRecord, PreferenceRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl PreferenceRepository for SqliteRepository {
    async fn get_preference(&self, key: &str) -> Result<Option<PreferenceRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT key, enabled, updated_at
            FROM preferences
            WHERE key = ?1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let key: String = row
            .try_get("key")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let enabled: i64 = row
            .try_get("enabled")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let enabled = match enabled {
            0 => false,
            1 => true,
            other => {
                return Err(StorageError::Serialization(format!(
                    "invalid flag value {other} for {key}"
                )));
            }
        };

        Ok(Some(PreferenceRecord {
            key,
            enabled,
            updated_at,
        }))
    }

    async fn set_flag(
        &self,
        key: &str,
        enabled: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO preferences (key, enabled, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                enabled = excluded.enabled,
                updated_at = excluded.updated_at
            WHERE excluded.updated_at >= preferences.updated_at
            ",
        )
        .bind(key)
        .bind(i64::from(enabled))
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
