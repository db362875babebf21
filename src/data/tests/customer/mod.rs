//! Tests for the customer repository, one module per method.

pub use chrono::NaiveDate;
pub use storefront_test_utils::prelude::*;

pub use crate::data::customer::CustomerRepository;


/// Builds a calendar date for seeding orders.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
