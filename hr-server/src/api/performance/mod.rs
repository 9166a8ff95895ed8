//! Performance Report API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/performance", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/submit", post(handler::submit))
        .route("/all", get(handler::list))
}
