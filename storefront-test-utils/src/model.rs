//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the test utilities. These aliases match those in the main storefront crate
//! to ensure consistency across tests.

/// Type alias for the customer database model.
pub type CustomerModel = entity::customer::Model;

/// Type alias for the order database model.
pub type OrderModel = entity::order::Model;
