use crate::backend::RecordStore;
use crate::error::{Result, StoreError};
use crate::filter::FilterExpression;
use crate::types::RestaurantRecord;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for a document store reachable over HTTP.
#[derive(Clone, Debug)]
pub struct RestStoreConfig {
    /// Base URL of the document store API
    pub endpoint: String,

    /// Optional API key sent as a bearer token
    pub api_key: Option<String>,

    /// Request timeout; the store client's only timeout policy
    pub timeout: Option<Duration>,
}

impl Default for RestStoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            api_key: None,
            timeout: Some(Duration::from_secs(10)),
        }
    }
}

#[derive(Serialize)]
struct ScanRequest<'a> {
    filter: Option<&'a FilterExpression>,
}

#[derive(Deserialize)]
struct ScanResponse {
    #[serde(default)]
    items: Vec<RestaurantRecord>,
}

/// Record store backed by a remote document store's scan/put API.
pub struct RestRecordStore {
    table: String,
    config: RestStoreConfig,
    client: reqwest::Client,
}

impl RestRecordStore {
    pub fn new(table: impl Into<String>, config: RestStoreConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| StoreError::invalid_config(format!("cannot build HTTP client: {err}")))?;

        Ok(Self {
            table: table.into(),
            config,
            client,
        })
    }

    fn table_url(&self, suffix: &str) -> String {
        let base = self.config.endpoint.trim_end_matches('/');
        format!("{base}/tables/{}/{suffix}", self.table)
    }

    fn prepare_request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(api_key) => builder.bearer_auth(api_key),
            None => builder,
        }
    }
}

/// Throttling and gateway failures are transient; everything else is a query failure.
fn classify_status(status: StatusCode, operation: &str) -> StoreError {
    let message = format!("{operation} returned HTTP {status}");
    match status {
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => StoreError::Unavailable(message),
        _ => StoreError::Query(message),
    }
}

#[async_trait]
impl RecordStore for RestRecordStore {
    fn table(&self) -> &str {
        &self.table
    }

    fn backend_name(&self) -> &'static str {
        "rest"
    }

    async fn scan(&self, filter: Option<&FilterExpression>) -> Result<Vec<RestaurantRecord>> {
        let url = self.table_url("scan");
        let request = self.prepare_request(self.client.post(&url).json(&ScanRequest { filter }));
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, "scan"));
        }

        let body: ScanResponse = response
            .json()
            .await
            .map_err(|err| StoreError::query(format!("undecodable scan response: {err}")))?;
        Ok(body.items)
    }

    async fn put(&self, record: RestaurantRecord) -> Result<()> {
        let url = self.table_url("items");
        let request = self.prepare_request(self.client.put(&url).json(&record));
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, "put"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_statuses_are_unavailable() {
        for status in [
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::BAD_GATEWAY,
            StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::GATEWAY_TIMEOUT,
        ] {
            assert!(classify_status(status, "scan").is_unavailable(), "{status}");
        }
        assert!(!classify_status(StatusCode::BAD_REQUEST, "scan").is_unavailable());
        assert!(!classify_status(StatusCode::INTERNAL_SERVER_ERROR, "scan").is_unavailable());
    }

    #[test]
    fn table_url_trims_trailing_slash() {
        let store = RestRecordStore::new(
            "Restaurants",
            RestStoreConfig {
                endpoint: "http://store.local/".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            store.table_url("scan"),
            "http://store.local/tables/Restaurants/scan"
        );
    }
}
