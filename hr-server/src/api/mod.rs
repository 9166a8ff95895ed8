//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录/登出/凭证开通
//! - [`employees`] - 员工管理接口
//! - [`attendance`] - 考勤查询接口
//! - [`projects`] - 项目任务接口
//! - [`announcements`] - 公告接口
//! - [`performance`] - 绩效报告接口
//! - [`settings`] - 总监设置接口
//! - [`holidays`] - 节假日接口
//! - [`messages`] - 站内消息接口

pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod employees;
pub mod health;
pub mod holidays;
pub mod messages;
pub mod performance;
pub mod projects;
pub mod settings;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Full application router with state applied
pub fn router(state: ServerState) -> Router {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(employees::router())
        .merge(attendance::router())
        .merge(projects::router())
        .merge(announcements::router())
        .merge(performance::router())
        .merge(settings::router())
        .merge(holidays::router())
        .merge(messages::router())
        .with_state(state)
}
