//! Pagination descriptor.

use serde::{Deserialize, Serialize};

/// A page of results: zero-based page number plus page size.
///
/// Translated internally to a row offset and limit when a query executes, so
/// callers can think in pages while the store thinks in rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page number.
    pub page: u64,
    /// Number of rows per page.
    pub size: u64,
}

impl PageRequest {
    /// Creates a new page request.
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// The row offset this page starts at.
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}
