//! Tests for OrderRepository::find_by_customer_id_in_order_by_order_id_desc method.

use super::*;

/// Expect orders sorted by descending order ID
#[tokio::test]
async fn returns_orders_sorted_descending() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_order(10, 1, date(2026, 1, 5))
        .with_mock_order(12, 1, date(2026, 1, 9))
        .with_mock_order(11, 2, date(2026, 1, 7))
        .build()
        .await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo
        .find_by_customer_id_in_order_by_order_id_desc(&[1, 2])
        .await;

    assert!(result.is_ok());
    let orders = result.unwrap();

    let ids: Vec<i64> = orders.iter().map(|o| o.order_id).collect();
    assert_eq!(ids, vec![12, 11, 10]);

    Ok(())
}

/// Expect customers outside the set to stay excluded from the sorted result
#[tokio::test]
async fn excludes_customers_outside_set() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_order(10, 1, date(2026, 1, 5))
        .with_mock_order(11, 2, date(2026, 1, 7))
        .build()
        .await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo
        .find_by_customer_id_in_order_by_order_id_desc(&[1])
        .await;

    assert!(result.is_ok());
    let orders = result.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_id, 10);

    Ok(())
}
