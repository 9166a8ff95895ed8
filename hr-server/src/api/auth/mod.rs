//! Authentication API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/auth/signin | POST | 登录，记录考勤 |
//! | /api/auth/logout | POST | 登出，补齐考勤 |
//! | /api/auth/credentials/{employeeId} | POST | 为员工创建登录凭证 |
//! | /api/auth/employees | GET | 已开通账户的员工 |
//! | /api/auth/pms | GET | 项目经理列表 |
//! | /api/auth/me | GET | 当前令牌持有者 |

mod handler;

pub use handler::{CredentialResponse, SignInRequest, SignInResponse};

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/signin", post(handler::signin))
        .route("/logout", post(handler::logout))
        .route("/credentials/{employee_id}", post(handler::create_credentials))
        .route("/employees", get(handler::assigned_employees))
        .route("/pms", get(handler::project_managers))
        .route("/me", get(handler::me))
}
