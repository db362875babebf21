//! Storefront database insertion utilities.
//!
//! This module provides methods for inserting customer and order records into the test
//! database with automatic parent row creation. If an order references a customer that
//! doesn't exist yet, the customer is created automatically to maintain referential
//! integrity.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::store::{factory, StoreFixtures},
    model::{CustomerModel, OrderModel},
};

impl<'a> StoreFixtures<'a> {
    /// Insert a mock customer into the database.
    ///
    /// Creates a customer record with standard test values. If a customer with the
    /// specified ID already exists, returns the existing record instead of creating
    /// a duplicate.
    ///
    /// # Arguments
    /// - `customer_id` - The customer ID to insert
    ///
    /// # Returns
    /// - `Ok(CustomerModel)` - The created or existing customer record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_customer(&self, customer_id: i64) -> Result<CustomerModel, TestError> {
        if let Some(existing_customer) = entity::prelude::Customer::find_by_id(customer_id)
            .one(&self.context.db)
            .await?
        {
            return Ok(existing_customer);
        }

        let customer = factory::mock_customer_model(customer_id);

        Ok(
            entity::prelude::Customer::insert(entity::customer::ActiveModel {
                customer_id: ActiveValue::Set(customer.customer_id),
                name: ActiveValue::Set(customer.name),
                email: ActiveValue::Set(customer.email),
                created_at: ActiveValue::Set(customer.created_at),
                updated_at: ActiveValue::Set(customer.updated_at),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a mock order into the database.
    ///
    /// Creates an order record with standard test values. The owning customer is
    /// created automatically if it doesn't exist. If an order with the specified ID
    /// already exists, returns the existing record.
    ///
    /// # Arguments
    /// - `order_id` - The order ID to insert
    /// - `customer_id` - The customer the order belongs to
    /// - `order_date` - The calendar date the order was placed on
    ///
    /// # Returns
    /// - `Ok(OrderModel)` - The created or existing order record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_order(
        &self,
        order_id: i64,
        customer_id: i64,
        order_date: NaiveDate,
    ) -> Result<OrderModel, TestError> {
        self.insert_mock_customer(customer_id).await?;

        if let Some(existing_order) = entity::prelude::Order::find_by_id(order_id)
            .one(&self.context.db)
            .await?
        {
            return Ok(existing_order);
        }

        let order = factory::mock_order_model(order_id, customer_id, order_date);

        Ok(entity::prelude::Order::insert(entity::order::ActiveModel {
            order_id: ActiveValue::Set(order.order_id),
            customer_id: ActiveValue::Set(order.customer_id),
            order_date: ActiveValue::Set(order.order_date),
            created_at: ActiveValue::Set(order.created_at),
            updated_at: ActiveValue::Set(order.updated_at),
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
