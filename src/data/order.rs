//! Order repository.
//!
//! All queries filter on the owning customer in one way or another; most take a set
//! of customer IDs and narrow, sort, or page the matching orders. An empty ID set
//! never errors: `IN ()` matches nothing and `NOT IN ()` matches everything.

use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::PageRequest;

/// Repository for order read queries.
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get an order by its order ID
    pub async fn get_by_id(&self, order_id: i64) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .one(self.db)
            .await
    }

    /// Get every order
    pub async fn get_all(&self) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find().all(self.db).await
    }

    /// Count all orders
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Order::find().count(self.db).await
    }

    /// Get all orders placed by one customer
    pub async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.eq(customer_id))
            .all(self.db)
            .await
    }

    /// Get all orders placed by any customer in the set
    pub async fn find_by_customer_id_in(
        &self,
        customer_ids: &[i64],
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Get all orders placed by customers outside the set
    pub async fn find_by_customer_id_not_in(
        &self,
        customer_ids: &[i64],
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_not_in(customer_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Get orders in the customer set placed strictly before the date
    pub async fn find_by_customer_id_in_and_order_date_less_than(
        &self,
        customer_ids: &[i64],
        order_date: NaiveDate,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .filter(entity::order::Column::OrderDate.lt(order_date))
            .all(self.db)
            .await
    }

    /// Get orders in the customer set placed strictly after the date
    pub async fn find_by_customer_id_in_and_order_date_greater_than(
        &self,
        customer_ids: &[i64],
        order_date: NaiveDate,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .filter(entity::order::Column::OrderDate.gt(order_date))
            .all(self.db)
            .await
    }

    /// Get orders in the customer set placed on or before the date
    pub async fn find_by_customer_id_in_and_order_date_less_than_equal(
        &self,
        customer_ids: &[i64],
        order_date: NaiveDate,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .filter(entity::order::Column::OrderDate.lte(order_date))
            .all(self.db)
            .await
    }

    /// Get orders in the customer set placed on or after the date
    pub async fn find_by_customer_id_in_and_order_date_greater_than_equal(
        &self,
        customer_ids: &[i64],
        order_date: NaiveDate,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .filter(entity::order::Column::OrderDate.gte(order_date))
            .all(self.db)
            .await
    }

    /// Get orders in the customer set, sorted by order ID ascending
    pub async fn find_by_customer_id_in_order_by_order_id_asc(
        &self,
        customer_ids: &[i64],
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .order_by_asc(entity::order::Column::OrderId)
            .all(self.db)
            .await
    }

    /// Get orders in the customer set, sorted by order ID descending
    pub async fn find_by_customer_id_in_order_by_order_id_desc(
        &self,
        customer_ids: &[i64],
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .order_by_desc(entity::order::Column::OrderId)
            .all(self.db)
            .await
    }

    /// Get orders in the customer set, sorted by order ID descending then order date ascending
    pub async fn find_by_customer_id_in_order_by_order_id_desc_order_date_asc(
        &self,
        customer_ids: &[i64],
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .order_by_desc(entity::order::Column::OrderId)
            .order_by_asc(entity::order::Column::OrderDate)
            .all(self.db)
            .await
    }

    /// Get the first `limit` orders in the customer set
    ///
    /// Ordering beyond the limit is the store default and not guaranteed.
    pub async fn find_top_by_customer_id_in(
        &self,
        customer_ids: &[i64],
        limit: u64,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Get one page of the orders in the customer set
    ///
    /// Rows are sorted by order ID ascending before paging so that consecutive
    /// pages partition the result set.
    pub async fn find_by_customer_id_in_paged(
        &self,
        customer_ids: &[i64],
        page: &PageRequest,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .order_by_asc(entity::order::Column::OrderId)
            .paginate(self.db, page.size)
            .fetch_page(page.page)
            .await
    }

    /// Get a window of the orders in the customer set by explicit row offset and count
    ///
    /// Same sort as [`find_by_customer_id_in_paged`](Self::find_by_customer_id_in_paged),
    /// with the window expressed directly in rows.
    pub async fn find_by_customer_id_in_offset_and_limit(
        &self,
        customer_ids: &[i64],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .order_by_asc(entity::order::Column::OrderId)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Get orders in the customer set whose date matches a pattern
    ///
    /// The order date is rendered as a `YYYY-MM-DD` string and matched with SQL
    /// `LIKE`, so `"%-17"` selects orders placed on the 17th of any month.
    pub async fn find_by_customer_id_in_and_day(
        &self,
        customer_ids: &[i64],
        day: &str,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.is_in(customer_ids.iter().copied()))
            .filter(Expr::cust_with_values(
                "CAST(order_date AS TEXT) LIKE ?",
                [day],
            ))
            .all(self.db)
            .await
    }
}
