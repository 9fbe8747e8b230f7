use crate::error::Result;
use crate::filter::FilterExpression;
use crate::types::RestaurantRecord;
use async_trait::async_trait;

/// A table of restaurant records.
///
/// Implementations return records in their own natural order and must surface
/// failures as errors rather than empty results.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Name of the table this handle reads from.
    fn table(&self) -> &str;

    /// Short backend identifier used in logs and health output.
    fn backend_name(&self) -> &'static str;

    /// Returns every record matching `filter`, or the whole table when `None`.
    async fn scan(&self, filter: Option<&FilterExpression>) -> Result<Vec<RestaurantRecord>>;

    /// Inserts or replaces a record keyed by its name.
    async fn put(&self, record: RestaurantRecord) -> Result<()>;
}
