//! Messaging API Module
//!
//! Lightweight one-to-one messaging between employees. Best-effort:
//! counters and denormalized previews are not transactional.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/messages", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/send", post(handler::send))
        .route("/conversations/{employee_id}", get(handler::conversations))
        .route("/{conversation_id}", get(handler::messages))
        .route("/{conversation_id}/read/{employee_id}", post(handler::mark_read))
}
