//! Order endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::db::OrderStore;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, OrderNum};
use crate::http::server::AppState;
use crate::models::{Order, OrderInput};

/// GET /orders - every order
#[utoipa::path(
    get,
    path = "/orders",
    tag = "order",
    responses((status = 200, description = "Every order", body = [Order]))
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.store.list_orders().await?;
    Ok(Json(orders))
}

/// POST /order - create with a generated order number
#[utoipa::path(
    post,
    path = "/order",
    tag = "order",
    request_body = OrderInput,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Body is not valid JSON"),
        (status = 409, description = "Generated order number already taken"),
    )
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<OrderInput>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    tracing::debug!(?input, "create order");

    let order = Order::new(state.ids.next_order_num(), input.defaulted());
    let order = state.store.create_order(order).await?;

    tracing::info!(ord_num = order.ord_num, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /order/{id}
#[utoipa::path(
    get,
    path = "/order/{id}",
    tag = "order",
    params(("id" = i64, Path, description = "Order number")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 400, description = "Order number is not an integer"),
        (status = 404, description = "No order with this number"),
    )
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    OrderNum(ord_num): OrderNum,
) -> Result<Json<Order>, ApiError> {
    let order = state.store.get_order(ord_num).await?;
    Ok(Json(order))
}

/// PUT /order/{id} - overwrite every field, undefined ones become 0 / ""
#[utoipa::path(
    put,
    path = "/order/{id}",
    tag = "order",
    params(("id" = i64, Path, description = "Order number")),
    request_body = OrderInput,
    responses(
        (status = 200, description = "Order replaced", body = Order),
        (status = 400, description = "Bad order number or body"),
        (status = 404, description = "No order with this number"),
    )
)]
pub async fn replace_order(
    State(state): State<Arc<AppState>>,
    OrderNum(ord_num): OrderNum,
    JsonBody(input): JsonBody<OrderInput>,
) -> Result<Json<Order>, ApiError> {
    tracing::debug!(ord_num, ?input, "replace order");

    let order = state.store.replace_order(ord_num, input.defaulted()).await?;

    tracing::info!(ord_num, "order replaced");
    Ok(Json(order))
}

/// PATCH /order/{id} - overwrite only the fields present
#[utoipa::path(
    patch,
    path = "/order/{id}",
    tag = "order",
    params(("id" = i64, Path, description = "Order number")),
    request_body = OrderInput,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 400, description = "Bad order number or body"),
        (status = 404, description = "No order with this number"),
    )
)]
pub async fn patch_order(
    State(state): State<Arc<AppState>>,
    OrderNum(ord_num): OrderNum,
    JsonBody(input): JsonBody<OrderInput>,
) -> Result<Json<Order>, ApiError> {
    tracing::debug!(ord_num, ?input, "patch order");

    if input.is_empty() {
        tracing::debug!(ord_num, "patch names no fields");
        return Ok(Json(state.store.get_order(ord_num).await?));
    }

    let order = state.store.patch_order(ord_num, input).await?;

    tracing::info!(ord_num, "order patched");
    Ok(Json(order))
}

/// DELETE /order/{id}
#[utoipa::path(
    delete,
    path = "/order/{id}",
    tag = "order",
    params(("id" = i64, Path, description = "Order number")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 400, description = "Order number is not an integer"),
        (status = 404, description = "No order with this number"),
    )
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    OrderNum(ord_num): OrderNum,
) -> Result<Json<Value>, ApiError> {
    state.store.delete_order(ord_num).await?;

    tracing::info!(ord_num, "order deleted");
    Ok(Json(json!({ "deleted": true })))
}

/// Order routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/order", post(create_order))
        .route(
            "/order/{id}",
            get(get_order)
                .put(replace_order)
                .patch(patch_order)
                .delete(delete_order),
        )
}
