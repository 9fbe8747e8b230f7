//! # Eatery Store
//!
//! Restaurant records and the tables that hold them.
//!
//! ## Architecture
//!
//! ```text
//! ScanFilter (style?, vegetarian, deliveries)
//!     │
//!     ├──> FilterExpression (conjunction of equality conditions, or none)
//!     │
//!     └──> StoreQuery ──> dyn RecordStore
//!                           ├─ MemoryStore   (in-process)
//!                           ├─ JsonFileStore (<data_dir>/<table>.json)
//!                           └─ RestRecordStore (HTTP document store)
//! ```
//!
//! Failures keep their kind all the way up: [`StoreError::Unavailable`] for
//! transient infrastructure problems, [`StoreError::Query`] for everything else.
//!
//! ## Example
//!
//! ```no_run
//! use eatery_store::{CuisineStyle, ScanFilter, StoreConfig, StoreQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = StoreConfig::from_env()?.open()?;
//!     let query = StoreQuery::new(store);
//!
//!     let filter = ScanFilter {
//!         style: Some(CuisineStyle::Italian),
//!         vegetarian: true,
//!         deliveries: false,
//!     };
//!     for record in query.fetch(&filter).await? {
//!         println!("{} ({})", record.name, record.address);
//!     }
//!     Ok(())
//! }
//! ```

mod backend;
mod config;
mod error;
mod file;
mod filter;
mod memory;
mod query;
mod rest;
mod seed;
mod types;

pub use backend::RecordStore;
pub use config::{
    StoreBackend, StoreConfig, API_KEY_ENV, BACKEND_ENV, DATA_DIR_ENV, DEFAULT_DATA_DIR,
    DEFAULT_TABLE, ENDPOINT_ENV, TABLE_ENV,
};
pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use filter::{
    apply_filter, AttributeValue, Condition, FilterExpression, RecordAttribute, ScanFilter,
};
pub use memory::MemoryStore;
pub use query::StoreQuery;
pub use rest::{RestRecordStore, RestStoreConfig};
pub use seed::{load_seed_file, parse_seed_records, seed_store, SeedReport};
pub use types::{CuisineStyle, RestaurantRecord};
