use crate::backend::RecordStore;
use crate::error::{Result, StoreError};
use crate::filter::{apply_filter, FilterExpression};
use crate::types::RestaurantRecord;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// Table persisted as a JSON array at `<data_dir>/<table>.json`.
///
/// The file is re-read on every scan so an external seeding run is picked up
/// without restarting the server.
pub struct JsonFileStore {
    table: String,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>, table: impl Into<String>) -> Self {
        let table = table.into();
        let path = data_dir.as_ref().join(format!("{table}.json"));
        Self {
            table,
            path,
            write_lock: Mutex::new(()),
        }
    }

    async fn read_records(&self) -> Result<Vec<RestaurantRecord>> {
        let bytes = fs::read(&self.path).await.map_err(|err| {
            StoreError::unavailable(format!("cannot read {}: {err}", self.path.display()))
        })?;
        serde_json::from_slice(&bytes).map_err(|err| {
            StoreError::query(format!("malformed table file {}: {err}", self.path.display()))
        })
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    fn table(&self) -> &str {
        &self.table
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }

    async fn scan(&self, filter: Option<&FilterExpression>) -> Result<Vec<RestaurantRecord>> {
        let records = self.read_records().await?;
        log::debug!(
            "Scanned {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(apply_filter(records, filter))
    }

    async fn put(&self, record: RestaurantRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = match fs::metadata(&self.path).await {
            Ok(_) => self.read_records().await?,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(StoreError::unavailable(format!(
                    "cannot stat {}: {err}",
                    self.path.display()
                )))
            }
        };

        match records.iter_mut().find(|existing| existing.name == record.name) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|err| {
                StoreError::unavailable(format!("cannot create {}: {err}", parent.display()))
            })?;
        }
        let bytes = serde_json::to_vec_pretty(&records)?;
        fs::write(&self.path, bytes).await.map_err(|err| {
            StoreError::unavailable(format!("cannot write {}: {err}", self.path.display()))
        })
    }
}
