//! Settings API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Settings, SettingsUpdate};
use crate::db::repository::SettingsRepository;
use crate::utils::AppResult;

/// Settings for a director; defaults when nothing stored yet
pub async fn get_settings(
    State(state): State<ServerState>,
    Path(director_id): Path<String>,
) -> AppResult<Json<Settings>> {
    let repo = SettingsRepository::new(state.get_db());
    let settings = repo
        .find_by_director(&director_id)
        .await?
        .unwrap_or_else(|| Settings::defaults(&director_id));
    Ok(Json(settings))
}

/// Upsert settings; only the provided fields change
pub async fn update_settings(
    State(state): State<ServerState>,
    Path(director_id): Path<String>,
    Json(payload): Json<SettingsUpdate>,
) -> AppResult<Json<Settings>> {
    let repo = SettingsRepository::new(state.get_db());
    let settings = repo.upsert(&director_id, payload).await?;
    Ok(Json(settings))
}
