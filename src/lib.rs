//! Customer and order data access for an e-commerce storefront.
//!
//! This crate provides the read side of a relational storefront schema: typed
//! repositories over the `customers` and `orders` tables, built on SeaORM. Queries
//! cover lookups by ID sets, date comparisons, sorting, two styles of pagination,
//! and pattern matching on formatted order dates. The crate holds no state between
//! calls; every query is dispatched independently to the underlying connection pool.
//!
//! Entity lifecycle (inserts, updates, deletes) belongs to other components and is
//! intentionally absent here.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod startup;
