use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260805_000001_customer::Customers;

static IDX_ORDERS_CUSTOMER_ID: &str = "idx-orders-customer_id";
static IDX_ORDERS_ORDER_DATE: &str = "idx-orders-order_date";
static FK_ORDERS_CUSTOMER_ID: &str = "fk-orders-customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::OrderId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(Orders::CustomerId))
                    .col(date(Orders::OrderDate))
                    .col(timestamp(Orders::CreatedAt))
                    .col(timestamp(Orders::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDERS_CUSTOMER_ID)
                    .table(Orders::Table)
                    .col(Orders::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDERS_ORDER_DATE)
                    .table(Orders::Table)
                    .col(Orders::OrderDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDERS_CUSTOMER_ID)
                    .from_tbl(Orders::Table)
                    .from_col(Orders::CustomerId)
                    .to_tbl(Customers::Table)
                    .to_col(Customers::CustomerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDERS_CUSTOMER_ID)
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDERS_ORDER_DATE)
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDERS_CUSTOMER_ID)
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    OrderId,
    CustomerId,
    OrderDate,
    CreatedAt,
    UpdatedAt,
}
