//! Announcement Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Announcement, AnnouncementCreate};

#[derive(Clone)]
pub struct AnnouncementRepository {
    base: BaseRepository,
}

impl AnnouncementRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All announcements, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Announcement>> {
        let announcements: Vec<Announcement> = self
            .base
            .db()
            .query("SELECT * FROM announcement ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(announcements)
    }

    /// Create a new announcement
    pub async fn create(
        &self,
        data: AnnouncementCreate,
        now_millis: i64,
    ) -> RepoResult<Announcement> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE announcement SET
                    title = $title,
                    message = $message,
                    department = $department,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("title", data.title))
            .bind(("message", data.message))
            .bind(("department", data.department))
            .bind(("created_at", now_millis))
            .await?;

        let created: Option<Announcement> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create announcement".to_string()))
    }

    /// Delete an announcement by id
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("announcement", id)?;
        let existing: Option<Announcement> = self.base.db().select(thing.clone()).await?;
        if existing.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
