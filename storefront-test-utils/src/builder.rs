//! Declarative test builder for test environment setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. The builder pattern allows chaining multiple configuration methods together,
//! with all operations queued and executed during the final `build()` call.

use chrono::NaiveDate;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()` to
/// create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_store_tables: bool,

    // Database fixtures to insert
    customers: Vec<i64>,
    orders: Vec<(i64, i64, NaiveDate)>, // (order_id, customer_id, order_date)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_store_tables: false,
            customers: Vec::new(),
            orders: Vec::new(),
        }
    }

    /// Add the standard storefront tables to the test database.
    ///
    /// Creates both tables the repositories operate on: Customer and Order.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_store_tables(mut self) -> Self {
        self.include_store_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock customer into the database.
    ///
    /// Queues a customer fixture to be inserted during `build()`.
    ///
    /// # Arguments
    /// - `customer_id` - The customer ID to insert
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_customer(mut self, customer_id: i64) -> Self {
        self.customers.push(customer_id);
        self
    }

    /// Insert a mock order into the database.
    ///
    /// Queues an order fixture to be inserted during `build()`. The owning customer
    /// will be created automatically if it doesn't already exist.
    ///
    /// # Arguments
    /// - `order_id` - The order ID to insert
    /// - `customer_id` - The customer the order belongs to
    /// - `order_date` - The calendar date the order was placed on
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_order(mut self, order_id: i64, customer_id: i64, order_date: NaiveDate) -> Self {
        self.orders.push((order_id, customer_id, order_date));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (store tables if specified, then custom tables)
    /// 2. Inserts database fixtures (customers, then orders)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_store_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::Order),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for customer_id in self.customers {
            setup.store().insert_mock_customer(customer_id).await?;
        }

        for (order_id, customer_id, order_date) in self.orders {
            setup
                .store()
                .insert_mock_order(order_id, customer_id, order_date)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
