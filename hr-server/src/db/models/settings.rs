//! Director Settings Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Per-director settings record, upserted under a deterministic id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub director: RecordId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_accent")]
    pub accent_color: String,
    #[serde(default)]
    pub two_step_login: bool,
    #[serde(default = "default_true")]
    pub email_notifications: bool,
    #[serde(default = "default_true")]
    pub system_notifications: bool,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Settings {
    /// Default settings for a director with nothing stored yet
    pub fn defaults(director_id: &str) -> Self {
        let key = director_id
            .strip_prefix("employee:")
            .unwrap_or(director_id);
        Self {
            id: None,
            director: RecordId::from_table_key("employee", key),
            full_name: None,
            email: None,
            mobile: None,
            theme: default_theme(),
            accent_color: default_accent(),
            two_step_login: false,
            email_notifications: true,
            system_notifications: true,
            company_name: None,
            logo: None,
        }
    }
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_accent() -> String {
    "#1d4ed8".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings update payload; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_step_login: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}
