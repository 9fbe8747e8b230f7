use eatery_protocol::ResponseStatus;
use eatery_store::StoreError;
use thiserror::Error;

/// Result type for recommendation requests
pub type Result<T> = std::result::Result<T, RecommendError>;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// No usable `sentence` in the request
    #[error("Missing required query parameter 'sentence'")]
    MissingSentence,

    /// The sentence names no known cuisine style
    #[error("Unsupported or missing cuisine style. Supported styles: {known}")]
    UnsupportedStyle { known: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RecommendError {
    pub fn status(&self) -> ResponseStatus {
        match self {
            RecommendError::MissingSentence | RecommendError::UnsupportedStyle { .. } => {
                ResponseStatus::ClientError
            }
            RecommendError::Store(err) if err.is_unavailable() => {
                ResponseStatus::ServiceUnavailable
            }
            RecommendError::Store(_) => ResponseStatus::InternalError,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RecommendError::MissingSentence => "missing_sentence",
            RecommendError::UnsupportedStyle { .. } => "unsupported_style",
            RecommendError::Store(StoreError::Unavailable(_)) => "store_unavailable",
            RecommendError::Store(StoreError::Query(_)) => "store_query_failed",
            RecommendError::Store(StoreError::InvalidConfig(_)) => "store_misconfigured",
        }
    }
}
