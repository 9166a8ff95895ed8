//! Attendance API Module
//!
//! Read-only queries; records themselves are written by the sign-in
//! and sign-out flows.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/attendance", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/employee/{employee_id}", get(handler::for_employee))
        .route("/all", get(handler::all))
}
