//! Tests for OrderRepository::get_all method.

use super::*;

/// Expect every seeded order regardless of customer
#[tokio::test]
async fn returns_every_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_order(10, 1, date(2026, 1, 5))
        .with_mock_order(11, 2, date(2026, 1, 7))
        .with_mock_order(12, 3, date(2026, 1, 9))
        .build()
        .await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo.get_all().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 3);

    Ok(())
}

/// Expect Ok with empty Vec when no orders exist
#[tokio::test]
async fn returns_empty_without_orders() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let order_repo = OrderRepository::new(&test.db);
    let result = order_repo.get_all().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
