use crate::backend::RecordStore;
use crate::error::{Result, StoreError};
use crate::file::JsonFileStore;
use crate::memory::MemoryStore;
use crate::rest::{RestRecordStore, RestStoreConfig};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub const TABLE_ENV: &str = "RESTAURANT_TABLE";
pub const BACKEND_ENV: &str = "EATERY_STORE_BACKEND";
pub const DATA_DIR_ENV: &str = "EATERY_DATA_DIR";
pub const ENDPOINT_ENV: &str = "EATERY_STORE_ENDPOINT";
pub const API_KEY_ENV: &str = "EATERY_STORE_API_KEY";

pub const DEFAULT_TABLE: &str = "Restaurants";
pub const DEFAULT_DATA_DIR: &str = ".eatery/data";

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File,
    Rest,
}

impl StoreBackend {
    pub const fn as_str(self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::File => "file",
            StoreBackend::Rest => "rest",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(StoreBackend::Memory),
            "file" | "json" => Ok(StoreBackend::File),
            "rest" | "http" => Ok(StoreBackend::Rest),
            other => Err(StoreError::invalid_config(format!(
                "unknown store backend '{other}' (expected memory|file|rest)"
            ))),
        }
    }
}

/// Everything needed to open the process-wide store handle.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub table: String,
    pub data_dir: PathBuf,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            table: DEFAULT_TABLE.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            endpoint: None,
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by whichever store environment variables are set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(backend) = env_non_empty(BACKEND_ENV) {
            config.backend = backend.parse()?;
        }
        if let Some(table) = env_non_empty(TABLE_ENV) {
            config.table = table;
        }
        if let Some(dir) = env_non_empty(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        config.endpoint = env_non_empty(ENDPOINT_ENV);
        config.api_key = env_non_empty(API_KEY_ENV);
        Ok(config)
    }

    /// Opens the store handle. Called once at process start.
    pub fn open(&self) -> Result<Arc<dyn RecordStore>> {
        let table = self.table.trim();
        if table.is_empty() {
            return Err(StoreError::invalid_config("table name must be non-empty"));
        }

        log::info!(
            "Opening {} record store for table '{table}'",
            self.backend.as_str()
        );
        let store: Arc<dyn RecordStore> = match self.backend {
            StoreBackend::Memory => Arc::new(MemoryStore::new(table)),
            StoreBackend::File => Arc::new(JsonFileStore::new(&self.data_dir, table)),
            StoreBackend::Rest => {
                let endpoint = self.endpoint.clone().ok_or_else(|| {
                    StoreError::invalid_config(format!(
                        "rest backend requires an endpoint (--endpoint or {ENDPOINT_ENV})"
                    ))
                })?;
                Arc::new(RestRecordStore::new(
                    table,
                    RestStoreConfig {
                        endpoint,
                        api_key: self.api_key.clone(),
                        timeout: Some(self.timeout),
                    },
                )?)
            }
        };
        Ok(store)
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_aliases() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!(" FILE ".parse::<StoreBackend>().unwrap(), StoreBackend::File);
        assert_eq!("http".parse::<StoreBackend>().unwrap(), StoreBackend::Rest);
        assert!("dynamo".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn rest_backend_requires_endpoint() {
        let config = StoreConfig {
            backend: StoreBackend::Rest,
            ..Default::default()
        };
        let err = config.open().err().unwrap();
        assert!(matches!(err, StoreError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn blank_table_is_rejected() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            table: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.open().is_err());
    }

    #[test]
    fn opens_named_table() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            table: "Bistros".to_string(),
            ..Default::default()
        };
        let store = config.open().unwrap();
        assert_eq!(store.table(), "Bistros");
        assert_eq!(store.backend_name(), "memory");
    }
}
