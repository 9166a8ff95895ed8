//! Holiday Calendar API Module
//!
//! Static configured list; no storage behind it.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/holidays", get(list))
}

#[derive(Debug, Clone, Serialize)]
pub struct Holiday {
    pub branch: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

const HOLIDAYS: &[Holiday] = &[
    Holiday { branch: "All", date: "2025-01-01", description: "New Year's Day", kind: "Mandatory" },
    Holiday { branch: "All", date: "2025-01-26", description: "Republic Day", kind: "Mandatory" },
    Holiday { branch: "All", date: "2025-03-14", description: "Holi", kind: "Mandatory" },
    Holiday { branch: "All", date: "2025-04-14", description: "Ambedkar Jayanti", kind: "Optional" },
    Holiday { branch: "All", date: "2025-05-01", description: "Labour Day", kind: "Mandatory" },
    Holiday { branch: "All", date: "2025-08-15", description: "Independence Day", kind: "Mandatory" },
    Holiday { branch: "All", date: "2025-10-02", description: "Gandhi Jayanti", kind: "Mandatory" },
    Holiday { branch: "All", date: "2025-10-21", description: "Diwali", kind: "Mandatory" },
    Holiday { branch: "All", date: "2025-12-25", description: "Christmas", kind: "Mandatory" },
];

async fn list() -> Json<Vec<Holiday>> {
    Json(HOLIDAYS.to_vec())
}
