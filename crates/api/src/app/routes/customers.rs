use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;

use storefront_core::CustomerId;
use storefront_customers::validate_customer;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", post(add_customer)).route(
        "/:id",
        get(get_customer).put(update_customer).delete(delete_customer),
    )
}

pub async fn add_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let draft = match validate_customer(&body) {
        Ok(draft) => draft,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.customers.create(&draft).await {
        Ok(_) => errors::json_message(StatusCode::CREATED, "New Customer added successfully"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.customers.list().await {
        Ok(customers) => {
            let items: Vec<_> = customers.iter().map(dto::customer_to_json).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.customers.get(CustomerId::new(id)).await {
        Ok(customer) => (StatusCode::OK, Json(dto::customer_to_json(&customer))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Full-replace update: validation requires every field, so the caller
/// resends the whole record. A missing row 404s before the payload is
/// judged.
pub async fn update_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let id = CustomerId::new(id);
    if let Err(e) = services.customers.get(id).await {
        return errors::store_error_to_response(e);
    }

    let draft = match validate_customer(&body) {
        Ok(draft) => draft,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.customers.update(id, &draft).await {
        Ok(_) => errors::json_message(StatusCode::OK, "Customer details have been updated!"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.customers.delete(CustomerId::new(id)).await {
        Ok(()) => errors::json_message(StatusCode::OK, "Customer removed successfully!"),
        Err(e) => errors::store_error_to_response(e),
    }
}
