//! Customer repository.

use sea_orm::{
    sea_query::{self, Query},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait,
};

/// Repository for customer read queries.
pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a customer by its customer ID
    pub async fn get_by_id(
        &self,
        customer_id: i64,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(customer_id)
            .one(self.db)
            .await
    }

    /// Get the customers that placed any of the provided orders
    ///
    /// Joins customers against their orders on customer ID and keeps the rows whose
    /// order ID is in the given set. Each customer appears at most once no matter
    /// how many of its orders matched. An empty set yields an empty result, and no
    /// ordering is guaranteed.
    pub async fn find_by_order_id_in(
        &self,
        order_ids: &[i64],
    ) -> Result<Vec<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .join(JoinType::InnerJoin, entity::customer::Relation::Order.def())
            .filter(entity::order::Column::OrderId.is_in(order_ids.iter().copied()))
            .distinct()
            .all(self.db)
            .await
    }

    /// Get the customer that placed the most recently dated order
    ///
    /// The order table is consulted through a one-row subquery sorted by order date
    /// descending. Orders sharing the latest date are tie-broken by highest order
    /// ID, so the result is deterministic. Returns `None` when no orders exist.
    pub async fn find_who_ordered_last(&self) -> Result<Option<entity::customer::Model>, DbErr> {
        let last_order_customer = Query::select()
            .column(entity::order::Column::CustomerId)
            .from(entity::prelude::Order)
            .order_by(entity::order::Column::OrderDate, sea_query::Order::Desc)
            .order_by(entity::order::Column::OrderId, sea_query::Order::Desc)
            .limit(1)
            .to_owned();

        entity::prelude::Customer::find()
            .filter(entity::customer::Column::CustomerId.in_subquery(last_order_customer))
            .one(self.db)
            .await
    }
}
