//! API 路由

mod error;
mod health;
mod orders;
mod products;
mod users;

pub use error::ApiError;

use axum::Router;
use serde::Serialize;

use crate::state::AppState;

/// 删除确认响应
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// 汇总全部路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(users::routes())
        .merge(products::routes())
        .merge(orders::routes())
}
