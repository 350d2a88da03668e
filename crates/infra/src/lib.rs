//! `storefront-infra` — Postgres-backed persistence.
//!
//! Owns the connection pool, startup schema creation, and the entity
//! repositories. Domain crates stay free of storage concerns; everything
//! that touches sqlx lives here.

pub mod db;
pub mod error;
pub mod repos;

pub use db::{connect, ensure_schema};
pub use error::{StoreError, StoreResult};
pub use repos::{CustomerRepo, OrderRepo, ProductRepo};
