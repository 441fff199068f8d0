pub mod client;
pub mod filter;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::ServiceError;

pub use client::RestClient;
pub use filter::OrFilter;

/// A row as returned by the data service: a plain JSON object. Schema is
/// owned by the service; callers read the fields they need.
pub type Row = Map<String, Value>;

/// Table-scoped query/update operations against the hosted data service.
///
/// Every call is a single round trip. Failures are returned as values
/// and inspected at the call site; the workflows decide whether to
/// continue or abandon a table.
#[async_trait]
pub trait DataService {
    /// Fetch rows from `table`, projecting `columns` (comma-separated),
    /// optionally restricted to rows matching the OR-combined filter.
    async fn select(
        &self,
        table: &str,
        columns: &str,
        filter: Option<&OrFilter>,
    ) -> Result<Vec<Row>, ServiceError>;

    /// Apply the field assignments in `patch` to the row(s) of `table`
    /// whose identifier equals `id`.
    async fn update(&self, table: &str, patch: &Value, id: &str) -> Result<(), ServiceError>;
}
