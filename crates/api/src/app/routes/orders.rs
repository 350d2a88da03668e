use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::Value;

use storefront_core::{CustomerId, OrderId};
use storefront_orders::validate_order;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_order))
        .route("/:id", get(get_order))
        .route("/customer/:customer_id", get(get_orders_for_customer))
}

/// Place an order. An omitted `order_date` defaults to the server's
/// current date before validation; unresolvable product ids abort the
/// whole creation with the full missing list.
pub async fn add_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let draft = match validate_order(&body, Utc::now().date_naive()) {
        Ok(draft) => draft,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.orders.create(&draft).await {
        Ok(_) => errors::json_message(StatusCode::CREATED, "New Order Placed!"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.orders.get(OrderId::new(id)).await {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// All orders for a customer; a customer with no orders gets an empty
/// list, not an error.
pub async fn get_orders_for_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(customer_id): Path<i64>,
) -> axum::response::Response {
    match services
        .orders
        .list_for_customer(CustomerId::new(customer_id))
        .await
    {
        Ok(orders) => {
            let items: Vec<_> = orders.iter().map(dto::order_to_json).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Products on an order; a missing order is an explicit 404.
pub async fn order_items(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.orders.items(OrderId::new(id)).await {
        Ok(products) => {
            let items: Vec<_> = products.iter().map(dto::product_to_json).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
