//! Tests for OrderRepository::find_by_customer_id_in method.
//!
//! This module verifies the IN-clause customer filter: exact membership of the
//! result set, graceful handling of empty inputs, and error handling for missing
//! database tables.

use super::*;

/// Expect exactly the orders whose customer is in the set
#[tokio::test]
async fn returns_orders_for_customers_in_set() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_order(10, 1, date(2026, 1, 5))
        .with_mock_order(11, 1, date(2026, 1, 7))
        .with_mock_order(12, 2, date(2026, 1, 9))
        .with_mock_order(13, 3, date(2026, 1, 11))
        .build()
        .await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo.find_by_customer_id_in(&[1, 2]).await;

    assert!(result.is_ok());
    let orders = result.unwrap();

    assert_eq!(orders.len(), 3);
    assert!(orders
        .iter()
        .all(|o| o.customer_id == 1 || o.customer_id == 2));

    Ok(())
}

/// Expect IDs without matching customers to be ignored
#[tokio::test]
async fn ignores_unknown_customer_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_order(10, 1, date(2026, 1, 5))
        .build()
        .await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo.find_by_customer_id_in(&[1, 999]).await;

    assert!(result.is_ok());
    let orders = result.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].customer_id, 1);

    Ok(())
}

/// Expect Ok with empty Vec for an empty customer ID set
#[tokio::test]
async fn returns_empty_for_empty_input() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_order(10, 1, date(2026, 1, 5))
        .build()
        .await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo.find_by_customer_id_in(&[]).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Expect Error when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo.find_by_customer_id_in(&[1, 2, 3]).await;

    assert!(result.is_err());

    Ok(())
}
