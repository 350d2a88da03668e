//! Entity repositories: one per table/relationship.
//!
//! Each repository wraps CRUD against one table, owns a pool clone, and
//! enforces the referential rules the domain layer cannot see.

pub mod customers;
pub mod orders;
pub mod products;

pub use customers::CustomerRepo;
pub use orders::OrderRepo;
pub use products::ProductRepo;
