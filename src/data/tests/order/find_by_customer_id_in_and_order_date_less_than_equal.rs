//! Tests for OrderRepository::find_by_customer_id_in_and_order_date_less_than_equal method.

use super::*;

/// Expect orders dated on or before the cutoff
#[tokio::test]
async fn returns_orders_on_or_before_date() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_order(10, 1, date(2026, 1, 5))
        .with_mock_order(11, 1, date(2026, 2, 14))
        .with_mock_order(12, 2, date(2026, 3, 20))
        .build()
        .await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo
        .find_by_customer_id_in_and_order_date_less_than_equal(&[1, 2], date(2026, 2, 14))
        .await;

    assert!(result.is_ok());
    let orders = result.unwrap();

    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.order_date <= date(2026, 2, 14)));

    Ok(())
}

/// Expect an order dated exactly at the cutoff to be included
#[tokio::test]
async fn includes_orders_on_the_cutoff_date() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_order(10, 1, date(2026, 2, 14))
        .build()
        .await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo
        .find_by_customer_id_in_and_order_date_less_than_equal(&[1], date(2026, 2, 14))
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 1);

    Ok(())
}
