//! 商品路由

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Deserialize;

use storefront_common::ProductId;
use storefront_ports::Repository;

use crate::api::{ApiError, DeleteResponse};
use crate::domain::Product;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// 商品请求体
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
}

impl ProductPayload {
    fn into_record(self) -> Product {
        Product {
            id: self.id.unwrap_or_default(),
            name: self.name,
            price: self.price,
        }
    }
}

async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.get(&id).await?))
}

async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.create(payload.into_record()).await?))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(
        state.products.update(&id, payload.into_record()).await?,
    ))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.products.delete(&id).await?;
    Ok(Json(DeleteResponse { deleted: true }))
}
