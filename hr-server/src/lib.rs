//! HR Server - 人事管理系统后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **业务服务** (`services`): 考勤跟踪、凭证开通
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! hr-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、口令散列
//! ├── services/      # 考勤、凭证开通
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、时间、日志
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::{AttendanceTracker, ProvisioningService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, create the work directory layout and start logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    if config.is_production() {
        init_logger_with_file(None, log_dir.to_str());
    } else {
        init_logger_with_file(None, None);
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ______     _____
   / / / / __ \   / ___/___  ______   _____  _____
  / /_/ / /_/ /   \__ \/ _ \/ ___/ | / / _ \/ ___/
 / __  / _, _/   ___/ /  __/ /   | |/ /  __/ /
/_/ /_/_/ |_|   /____/\___/_/    |___/\___/_/
    "#
    );
}
