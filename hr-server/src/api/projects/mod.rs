//! Project/Task API Module
//!
//! Tasks live embedded in the employee record; every route here
//! rewrites one employee's `projects` list.

mod handler;

use axum::{
    Router,
    routing::{get, patch, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/projects", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/assign", post(handler::assign))
        .route("/task/{employee_id}", get(handler::tasks))
        .route("/{employee_id}/{task_id}", put(handler::update_task))
        .route("/{employee_id}/{task_id}/status", patch(handler::set_status))
}
