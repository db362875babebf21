//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating customer and order database models with
//! standard test values. These are in-memory model instances that don't require
//! database interaction, suitable for unit tests.

use chrono::{NaiveDate, Utc};

use crate::model::{CustomerModel, OrderModel};

/// Create a mock customer database model for testing.
///
/// Returns a CustomerModel with standard test values. The email is derived from the
/// customer ID so that multiple mock customers never collide on the unique email column.
///
/// # Arguments
/// - `customer_id` - The customer ID to use
///
/// # Returns
/// - `CustomerModel` - A customer model with test data
pub fn mock_customer_model(customer_id: i64) -> CustomerModel {
    let now = Utc::now().naive_utc();
    CustomerModel {
        customer_id,
        name: format!("Customer {}", customer_id),
        email: format!("customer{}@example.com", customer_id),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock order database model for testing.
///
/// Returns an OrderModel with standard test values. This creates an in-memory model
/// instance without database interaction, suitable for unit tests.
///
/// # Arguments
/// - `order_id` - The order ID to use
/// - `customer_id` - The customer the order belongs to
/// - `order_date` - The calendar date the order was placed on
///
/// # Returns
/// - `OrderModel` - An order model with test data
pub fn mock_order_model(order_id: i64, customer_id: i64, order_date: NaiveDate) -> OrderModel {
    let now = Utc::now().naive_utc();
    OrderModel {
        order_id,
        customer_id,
        order_date,
        created_at: now,
        updated_at: now,
    }
}
