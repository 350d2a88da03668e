//! Infrastructure wiring: one repository per entity, sharing a pool.

use sqlx::PgPool;

use storefront_infra::{CustomerRepo, OrderRepo, ProductRepo};

/// Repository set threaded to every handler via `Extension<Arc<AppServices>>`.
///
/// The pool is the only shared mutable resource; repositories clone it
/// (it is reference-counted internally).
#[derive(Debug, Clone)]
pub struct AppServices {
    pub customers: CustomerRepo,
    pub products: ProductRepo,
    pub orders: OrderRepo,
}

impl AppServices {
    pub fn new(pool: PgPool) -> Self {
        Self {
            customers: CustomerRepo::new(pool.clone()),
            products: ProductRepo::new(pool.clone()),
            orders: OrderRepo::new(pool),
        }
    }
}
