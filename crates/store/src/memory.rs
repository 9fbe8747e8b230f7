use crate::backend::RecordStore;
use crate::error::{Result, StoreError};
use crate::filter::{apply_filter, FilterExpression};
use crate::types::RestaurantRecord;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-process table keeping insertion order.
pub struct MemoryStore {
    table: String,
    records: Mutex<Vec<RestaurantRecord>>,
}

impl MemoryStore {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(table: impl Into<String>, records: Vec<RestaurantRecord>) -> Self {
        Self {
            table: table.into(),
            records: Mutex::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn table(&self) -> &str {
        &self.table
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn scan(&self, filter: Option<&FilterExpression>) -> Result<Vec<RestaurantRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::query("memory store lock poisoned"))?
            .clone();
        Ok(apply_filter(records, filter))
    }

    async fn put(&self, record: RestaurantRecord) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::query("memory store lock poisoned"))?;
        match records.iter_mut().find(|existing| existing.name == record.name) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ScanFilter;
    use crate::types::CuisineStyle;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn put_replaces_by_name_in_place() {
        let store = MemoryStore::new("Restaurants");
        store.put(RestaurantRecord::new("a", "french")).await.unwrap();
        store.put(RestaurantRecord::new("b", "korean")).await.unwrap();
        store
            .put(RestaurantRecord::new("a", "french").with_vegetarian(true))
            .await
            .unwrap();

        let records = store.scan(None).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(records[0].name, "a");
        assert!(records[0].vegetarian);
        assert_eq!(records[1].name, "b");
    }

    #[tokio::test]
    async fn scan_applies_filter() {
        let store = MemoryStore::with_records(
            "Restaurants",
            vec![
                RestaurantRecord::new("a", "french"),
                RestaurantRecord::new("b", "korean").with_deliveries(true),
            ],
        );
        let filter = ScanFilter {
            style: Some(CuisineStyle::Korean),
            deliveries: true,
            ..Default::default()
        }
        .expression();

        let records = store.scan(filter.as_ref()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "b");
    }
}
