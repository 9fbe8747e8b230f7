use thiserror::Error;

/// Result type for record store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a record store.
///
/// `Unavailable` is reserved for transient infrastructure failures so callers can
/// report them differently from failures of the query itself.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached (connectivity, throttling, outage)
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but the query failed
    #[error("Record store query failed: {0}")]
    Query(String),

    /// The store handle could not be built from configuration
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Query(format!("malformed record data: {error}"))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            StoreError::Unavailable(error.to_string())
        } else {
            StoreError::Query(error.to_string())
        }
    }
}
