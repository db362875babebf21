//! Data access layer repositories.
//!
//! This module contains the database repository implementations for the storefront
//! schema. Repositories provide an abstraction layer over database operations,
//! organized by entity: customers and the orders they place. Every method is a
//! read; row lifecycle is managed elsewhere.

pub mod customer;
pub mod order;

#[cfg(test)]
mod tests;
