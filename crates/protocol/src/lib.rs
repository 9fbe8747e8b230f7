use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const RESPONSE_SCHEMA_VERSION: u32 = 1;

/// Machine-checkable category of a recommendation response.
///
/// Clients should branch on this value, never on the free-text `message`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    ClientError,
    Recommended,
    NoMatch,
    ServiceUnavailable,
    InternalError,
}

impl ResponseStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ResponseStatus::ClientError => "client_error",
            ResponseStatus::Recommended => "recommended",
            ResponseStatus::NoMatch => "no_match",
            ResponseStatus::ServiceUnavailable => "service_unavailable",
            ResponseStatus::InternalError => "internal_error",
        }
    }

    /// `no_match` counts as success: an empty result is a legitimate answer.
    pub const fn is_success(self) -> bool {
        matches!(self, ResponseStatus::Recommended | ResponseStatus::NoMatch)
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            hint: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

fn default_schema_version() -> u32 {
    RESPONSE_SCHEMA_VERSION
}

impl Default for ResponseMeta {
    fn default() -> Self {
        Self {
            schema_version: RESPONSE_SCHEMA_VERSION,
            table: None,
            candidates: None,
            duration_ms: None,
        }
    }
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}
