//! Customer repository.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use storefront_core::{CustomerId, DomainError};
use storefront_customers::{Customer, CustomerDraft};

use crate::error::{StoreError, StoreResult, is_foreign_key_violation};

const ENTITY: &str = "Customer";

#[derive(Debug, Clone)]
pub struct CustomerRepo {
    pool: PgPool,
}

impl CustomerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a row and return it with the store-assigned id.
    ///
    /// No duplicate-email check: two customers may share an address.
    #[instrument(skip(self, draft), err)]
    pub async fn create(&self, draft: &CustomerDraft) -> StoreResult<Customer> {
        let row = sqlx::query(
            "INSERT INTO customers (customer_name, email, phone) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&draft.customer_name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.try_get("id")?;
        Ok(Customer {
            id: CustomerId::new(id),
            customer_name: draft.customer_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
        })
    }

    #[instrument(skip(self), err)]
    pub async fn list(&self) -> StoreResult<Vec<Customer>> {
        let rows = sqlx::query(
            "SELECT id, customer_name, email, phone FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(customer_from_row).collect()
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: CustomerId) -> StoreResult<Customer> {
        let row = sqlx::query(
            "SELECT id, customer_name, email, phone FROM customers WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DomainError::not_found(ENTITY))?;

        customer_from_row(&row)
    }

    /// Overwrite every field (full replace; validation requires the full
    /// record).
    #[instrument(skip(self, draft), err)]
    pub async fn update(&self, id: CustomerId, draft: &CustomerDraft) -> StoreResult<Customer> {
        let result = sqlx::query(
            "UPDATE customers SET customer_name = $1, email = $2, phone = $3 WHERE id = $4",
        )
        .bind(&draft.customer_name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(ENTITY).into());
        }

        Ok(Customer {
            id,
            customer_name: draft.customer_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
        })
    }

    /// Delete a row. Does not cascade: a customer with existing orders is
    /// kept and the call fails with a conflict.
    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: CustomerId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    StoreError::from(DomainError::conflict("Customer has existing orders"))
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

fn customer_from_row(row: &PgRow) -> StoreResult<Customer> {
    Ok(Customer {
        id: CustomerId::new(row.try_get("id")?),
        customer_name: row.try_get("customer_name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
    })
}
