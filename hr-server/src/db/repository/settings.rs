//! Director Settings Repository
//!
//! One record per director, keyed deterministically by the director's
//! record key so updates are a single UPSERT.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Settings, SettingsUpdate};

#[derive(Clone)]
pub struct SettingsRepository {
    base: BaseRepository,
}

impl SettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Settings for one director, if stored
    pub async fn find_by_director(&self, director_id: &str) -> RepoResult<Option<Settings>> {
        let director = parse_record_id("employee", director_id)?;
        let key = director.key().to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM type::thing('settings', $key)")
            .bind(("key", key))
            .await?;
        let settings: Option<Settings> = result.take(0)?;
        Ok(settings)
    }

    /// Upsert the settings for one director
    pub async fn upsert(&self, director_id: &str, data: SettingsUpdate) -> RepoResult<Settings> {
        let director = parse_record_id("employee", director_id)?;
        let key = director.key().to_string();

        let mut patch = serde_json::to_value(&data)
            .map_err(|e| RepoError::Database(format!("Failed to serialize settings: {}", e)))?;
        if let Some(map) = patch.as_object_mut() {
            map.insert(
                "director".to_string(),
                serde_json::Value::String(director.to_string()),
            );
        }

        let mut result = self
            .base
            .db()
            .query("UPSERT type::thing('settings', $key) MERGE $patch RETURN AFTER")
            .bind(("key", key))
            .bind(("patch", patch))
            .await?;

        let updated: Option<Settings> = result.take(0)?;
        updated.ok_or_else(|| RepoError::Database("Failed to upsert settings".to_string()))
    }
}
