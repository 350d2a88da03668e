use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::DomainError;
use storefront_infra::StoreError;

/// Map a domain failure to an HTTP response.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(fields) => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "validation_error",
                "fields": fields,
            })),
        )
            .into_response(),
        DomainError::NotFound { entity } => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{entity} not found"))
        }
        DomainError::MissingProducts(ids) => {
            let ids: Vec<i64> = ids.iter().map(|id| id.as_i64()).collect();
            (
                StatusCode::NOT_FOUND,
                axum::Json(json!({
                    "error": "products_not_found",
                    "message": format!("Products with ids {ids:?} not found"),
                    "missing_ids": ids,
                })),
            )
                .into_response()
        }
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

/// Map a store failure to an HTTP response. Domain failures pass through;
/// anything the store itself raised becomes a generic server error (the
/// cause is logged, never echoed to the client).
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Domain(err) => domain_error_to_response(err),
        StoreError::Database(err) => {
            tracing::error!(error = %err, "store operation failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "store operation failed",
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Success envelope used by the write endpoints.
pub fn json_message(status: StatusCode, text: &'static str) -> axum::response::Response {
    (status, axum::Json(json!({ "Message": text }))).into_response()
}
