//! 用户路由

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Deserialize;

use storefront_common::UserId;
use storefront_ports::Repository;

use crate::api::{ApiError, DeleteResponse};
use crate::domain::User;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// 用户请求体
///
/// id 可省略；提供时会被仓库分配的值覆盖
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}

impl UserPayload {
    fn into_record(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            name: self.name,
            email: self.email,
        }
    }
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get(&id).await?))
}

async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.create(payload.into_record()).await?))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.update(&id, payload.into_record()).await?))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.users.delete(&id).await?;
    Ok(Json(DeleteResponse { deleted: true }))
}
