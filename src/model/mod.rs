//! Plain data types shared with callers of the data layer.

pub mod page;

pub use page::PageRequest;
