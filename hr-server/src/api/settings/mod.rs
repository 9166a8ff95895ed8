//! Settings API Module
//!
//! Per-director UI preferences, stored under a deterministic record id
//! so reads and upserts always target the same row.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/settings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route(
        "/{director_id}",
        get(handler::get_settings).put(handler::update_settings),
    )
}
