//! Order repository.
//!
//! The most involved of the three: order creation fans out over the
//! order-product join relation, and every read resolves the joined
//! products back into the order.

use std::collections::HashSet;

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use storefront_core::{CustomerId, DomainError, OrderId, ProductId};
use storefront_orders::{Order, OrderDraft};
use storefront_products::Product;

use crate::error::StoreResult;
use crate::repos::products::product_from_row;

const ENTITY: &str = "Order";

#[derive(Debug, Clone)]
pub struct OrderRepo {
    pool: PgPool,
}

impl OrderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an order and its join rows in one transaction.
    ///
    /// Every item id is resolved before anything is written; if any are
    /// unresolvable the whole creation fails with the full list of missing
    /// ids and nothing persists. Item ids are treated as a set, so
    /// duplicates collapse to one join row. The customer id is not checked
    /// here: the foreign key on `orders.customer_id` rejects unknown
    /// customers at insert time.
    #[instrument(
        skip(self, draft),
        fields(customer_id = %draft.customer_id, items = draft.items.len()),
        err
    )]
    pub async fn create(&self, draft: &OrderDraft) -> StoreResult<Order> {
        let mut tx = self.pool.begin().await?;

        let mut seen = HashSet::new();
        let mut resolved: Vec<Product> = Vec::new();
        let mut missing: Vec<ProductId> = Vec::new();
        for &item in &draft.items {
            if !seen.insert(item) {
                continue;
            }
            let row = sqlx::query("SELECT id, product_name, price FROM products WHERE id = $1")
                .bind(item.as_i64())
                .fetch_optional(&mut *tx)
                .await?;
            match row {
                Some(row) => resolved.push(product_from_row(&row)?),
                None => missing.push(item),
            }
        }

        if !missing.is_empty() {
            tx.rollback().await?;
            return Err(DomainError::missing_products(missing).into());
        }

        let row = sqlx::query(
            "INSERT INTO orders (order_date, customer_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(draft.order_date)
        .bind(draft.customer_id.as_i64())
        .fetch_one(&mut *tx)
        .await?;
        let id: i64 = row.try_get("id")?;

        for product in &resolved {
            sqlx::query("INSERT INTO order_products (order_id, product_id) VALUES ($1, $2)")
                .bind(id)
                .bind(product.id.as_i64())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Order {
            id: OrderId::new(id),
            order_date: draft.order_date,
            customer_id: draft.customer_id,
            products: resolved,
        })
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: OrderId) -> StoreResult<Order> {
        let row = sqlx::query("SELECT id, order_date, customer_id FROM orders WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DomainError::not_found(ENTITY))?;

        self.hydrate(&row).await
    }

    /// All orders for a customer, oldest first. A customer with no orders
    /// yields an empty list, never an error.
    #[instrument(skip(self), err)]
    pub async fn list_for_customer(&self, customer_id: CustomerId) -> StoreResult<Vec<Order>> {
        let rows = sqlx::query(
            "SELECT id, order_date, customer_id FROM orders WHERE customer_id = $1 ORDER BY id",
        )
        .bind(customer_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in &rows {
            orders.push(self.hydrate(row).await?);
        }
        Ok(orders)
    }

    /// Products on an order. The order's existence is checked explicitly:
    /// a missing order is NotFound, not an empty list.
    #[instrument(skip(self), err)]
    pub async fn items(&self, id: OrderId) -> StoreResult<Vec<Product>> {
        sqlx::query("SELECT id FROM orders WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DomainError::not_found(ENTITY))?;

        self.products_for(id).await
    }

    async fn hydrate(&self, row: &PgRow) -> StoreResult<Order> {
        let id = OrderId::new(row.try_get("id")?);
        Ok(Order {
            id,
            order_date: row.try_get("order_date")?,
            customer_id: CustomerId::new(row.try_get("customer_id")?),
            products: self.products_for(id).await?,
        })
    }

    async fn products_for(&self, order_id: OrderId) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.product_name, p.price
            FROM products p
            JOIN order_products op ON op.product_id = p.id
            WHERE op.order_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(order_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(product_from_row).collect()
    }
}
