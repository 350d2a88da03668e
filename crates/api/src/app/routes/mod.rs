use axum::{Router, routing::get};

pub mod customers;
pub mod orders;
pub mod products;
pub mod system;

/// Router for all entity endpoints.
///
/// The customer list route is `GET /customer` (singular), and order items
/// hang off `/order_items/{id}` rather than under `/orders` — both part of
/// the published surface.
pub fn router() -> Router {
    Router::new()
        .route("/customer", get(customers::list_customers))
        .nest("/customers", customers::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .route("/order_items/:id", get(orders::order_items))
}
