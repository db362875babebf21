//! Tests for OrderRepository::find_by_customer_id_in_order_by_order_id_desc_order_date_asc method.
//!
//! Order IDs are unique, so the secondary date key can never actually reorder
//! rows; the tests pin the primary descending key and the set filter.

use super::*;

/// Expect orders sorted by the primary key, order ID descending
#[tokio::test]
async fn returns_orders_sorted_by_order_id_descending() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_order(10, 1, date(2026, 3, 20))
        .with_mock_order(11, 1, date(2026, 1, 5))
        .with_mock_order(12, 2, date(2026, 2, 14))
        .build()
        .await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo
        .find_by_customer_id_in_order_by_order_id_desc_order_date_asc(&[1, 2])
        .await;

    assert!(result.is_ok());
    let orders = result.unwrap();

    let ids: Vec<i64> = orders.iter().map(|o| o.order_id).collect();
    assert_eq!(ids, vec![12, 11, 10]);

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
    let result = order_repo
        .find_by_customer_id_in_order_by_order_id_desc_order_date_asc(&[])
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
