//! 订单路由

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Deserialize;

use storefront_common::{OrderId, ProductId, UserId};
use storefront_ports::Repository;

use crate::api::{ApiError, DeleteResponse};
use crate::domain::Order;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// 订单请求体
///
/// user_id 与 items 不做存在性校验
#[derive(Debug, Deserialize)]
pub struct OrderPayload {
    #[serde(default)]
    pub id: Option<OrderId>,
    pub user_id: UserId,
    pub items: Vec<ProductId>,
    pub total: f64,
}

impl OrderPayload {
    fn into_record(self) -> Order {
        Order {
            id: self.id.unwrap_or_default(),
            user_id: self.user_id,
            items: self.items,
            total: self.total,
        }
    }
}

async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.list().await?))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.get(&id).await?))
}

async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.create(payload.into_record()).await?))
}

async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.update(&id, payload.into_record()).await?))
}

async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.orders.delete(&id).await?;
    Ok(Json(DeleteResponse { deleted: true }))
}
