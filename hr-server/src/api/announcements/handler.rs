//! Announcement API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Announcement, AnnouncementCreate};
use crate::db::repository::AnnouncementRepository;
use crate::utils::{AppError, AppResult, time};

/// All announcements, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Announcement>>> {
    let repo = AnnouncementRepository::new(state.get_db());
    let announcements = repo.find_all().await?;
    Ok(Json(announcements))
}

/// Publish an announcement to an audience
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AnnouncementCreate>,
) -> AppResult<Json<Announcement>> {
    if payload.title.trim().is_empty() || payload.message.trim().is_empty() {
        return Err(AppError::validation("Title and message are required"));
    }

    let repo = AnnouncementRepository::new(state.get_db());
    let announcement = repo.create(payload, time::now_millis()).await?;
    Ok(Json(announcement))
}

/// Remove an announcement
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = AnnouncementRepository::new(state.get_db());
    let deleted = repo.delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Announcement {} not found", id)));
    }
    Ok(Json(true))
}
