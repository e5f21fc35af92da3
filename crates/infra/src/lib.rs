//! Infrastructure layer: the in-memory record store and the queries that run
//! against it.

pub mod query;
pub mod store;

pub use query::{Page, PageRequest, SkuFilter, SkuQuery, SkuSort, SkuSortField, SortOrder};
pub use store::RecordStore;
