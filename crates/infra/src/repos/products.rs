//! Product repository.
//!
//! Same operation shape as the customer repository; products carry no
//! outbound foreign keys, so no referential checks are needed here.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use storefront_core::{DomainError, ProductId};
use storefront_products::{Product, ProductDraft};

use crate::error::{StoreError, StoreResult, is_foreign_key_violation};

const ENTITY: &str = "Product";

#[derive(Debug, Clone)]
pub struct ProductRepo {
    pool: PgPool,
}

impl ProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[instrument(skip(self, draft), err)]
    pub async fn create(&self, draft: &ProductDraft) -> StoreResult<Product> {
        let row = sqlx::query(
            "INSERT INTO products (product_name, price) VALUES ($1, $2) RETURNING id",
        )
        .bind(&draft.product_name)
        .bind(draft.price)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.try_get("id")?;
        Ok(Product {
            id: ProductId::new(id),
            product_name: draft.product_name.clone(),
            price: draft.price,
        })
    }

    #[instrument(skip(self), err)]
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query("SELECT id, product_name, price FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(product_from_row).collect()
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: ProductId) -> StoreResult<Product> {
        let row = sqlx::query("SELECT id, product_name, price FROM products WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DomainError::not_found(ENTITY))?;

        product_from_row(&row)
    }

    #[instrument(skip(self, draft), err)]
    pub async fn update(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<Product> {
        let result = sqlx::query("UPDATE products SET product_name = $1, price = $2 WHERE id = $3")
            .bind(&draft.product_name)
            .bind(draft.price)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(ENTITY).into());
        }

        Ok(Product {
            id,
            product_name: draft.product_name.clone(),
            price: draft.price,
        })
    }

    /// Delete a row; a product referenced by order lines is kept and the
    /// call fails with a conflict.
    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: ProductId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    StoreError::from(DomainError::conflict(
                        "Product is referenced by existing orders",
                    ))
                } else {
                    StoreError::from(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(ENTITY).into());
        }
        Ok(())
    }
}

pub(crate) fn product_from_row(row: &PgRow) -> StoreResult<Product> {
    Ok(Product {
        id: ProductId::new(row.try_get("id")?),
        product_name: row.try_get("product_name")?,
        price: row.try_get("price")?,
    })
}
