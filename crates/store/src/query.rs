use crate::backend::RecordStore;
use crate::error::Result;
use crate::filter::ScanFilter;
use crate::types::RestaurantRecord;
use std::sync::Arc;

/// Translates a [`ScanFilter`] into a single scan against the shared store handle.
#[derive(Clone)]
pub struct StoreQuery {
    store: Arc<dyn RecordStore>,
}

impl StoreQuery {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Fetches matching records in store order.
    ///
    /// Store failures are returned as-is; an error never becomes an empty list.
    pub async fn fetch(&self, filter: &ScanFilter) -> Result<Vec<RestaurantRecord>> {
        let expression = filter.expression();
        match &expression {
            Some(expression) => log::debug!(
                "Scanning table '{}' with {} condition(s): {:?}",
                self.store.table(),
                expression.conditions().len(),
                expression.conditions()
            ),
            None => log::debug!("Scanning table '{}' without filter", self.store.table()),
        }

        match self.store.scan(expression.as_ref()).await {
            Ok(records) => {
                log::debug!("Scan returned {} record(s)", records.len());
                Ok(records)
            }
            Err(err) => {
                log::warn!("Scan of table '{}' failed: {err}", self.store.table());
                Err(err)
            }
        }
    }
}
