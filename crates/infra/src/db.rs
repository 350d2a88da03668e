//! Pool construction and startup schema creation.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::StoreResult;

/// Tables are created if absent; existing tables are never altered (there
/// is no migration support).
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id            BIGSERIAL PRIMARY KEY,
        customer_name TEXT NOT NULL,
        email         TEXT NOT NULL,
        phone         TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id           BIGSERIAL PRIMARY KEY,
        product_name TEXT NOT NULL,
        price        DOUBLE PRECISION NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id          BIGSERIAL PRIMARY KEY,
        order_date  DATE NOT NULL,
        customer_id BIGINT NOT NULL REFERENCES customers (id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_products (
        order_id   BIGINT NOT NULL REFERENCES orders (id),
        product_id BIGINT NOT NULL REFERENCES products (id),
        PRIMARY KEY (order_id, product_id)
    )
    "#,
];

/// Connect a pool against the given database URL.
pub async fn connect(database_url: &str) -> StoreResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create any missing tables.
///
/// The foreign keys carry no ON DELETE action: deleting a customer or
/// product that orders still reference is restricted by the store.
pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("schema ensured");
    Ok(())
}
