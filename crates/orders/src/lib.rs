//! Orders domain module.
//!
//! This crate contains business rules for orders and their product lines,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod order;

pub use order::{Order, OrderDraft, validate_order};
