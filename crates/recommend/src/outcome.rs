use crate::error::RecommendError;
use crate::sentence::FilterCriteria;
use eatery_protocol::{ErrorEnvelope, ResponseMeta, ResponseStatus};
use eatery_store::{CuisineStyle, RestaurantRecord};
use serde::{Deserialize, Serialize};

pub const NO_MATCH_MESSAGE: &str = "No matching restaurant found";

/// Categorized result of one recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEnvelope>,
    #[serde(
        rename = "restaurantRecommendation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub restaurant_recommendation: Option<RestaurantRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<FilterCriteria>,
    #[serde(default)]
    pub meta: ResponseMeta,
}

impl RecommendationOutcome {
    pub fn recommended(record: RestaurantRecord, criteria: FilterCriteria) -> Self {
        Self {
            status: ResponseStatus::Recommended,
            message: None,
            error: None,
            restaurant_recommendation: Some(record),
            criteria: Some(criteria),
            meta: ResponseMeta::default(),
        }
    }

    pub fn no_match(criteria: FilterCriteria) -> Self {
        Self {
            status: ResponseStatus::NoMatch,
            message: Some(NO_MATCH_MESSAGE.to_string()),
            error: None,
            restaurant_recommendation: None,
            criteria: Some(criteria),
            meta: ResponseMeta::default(),
        }
    }

    pub fn failed(err: &RecommendError, criteria: Option<FilterCriteria>) -> Self {
        let message = err.to_string();
        Self {
            status: err.status(),
            message: Some(message.clone()),
            error: Some(error_envelope(err, message)),
            restaurant_recommendation: None,
            criteria,
            meta: ResponseMeta::default(),
        }
    }

    /// Builds a client-error outcome for request problems found before the pipeline.
    pub fn client_error(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: ResponseStatus::ClientError,
            message: Some(message.clone()),
            error: Some(ErrorEnvelope::new(code, message)),
            restaurant_recommendation: None,
            criteria: None,
            meta: ResponseMeta::default(),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.status.is_success()
    }
}

fn error_envelope(err: &RecommendError, message: String) -> ErrorEnvelope {
    let envelope = ErrorEnvelope::new(err.code(), message);
    match err {
        RecommendError::MissingSentence => envelope
            .with_hint("Pass a sentence, e.g. ?sentence=vegetarian italian food open now"),
        RecommendError::UnsupportedStyle { .. } => {
            let known: Vec<&str> = CuisineStyle::ALL.iter().map(|s| s.as_str()).collect();
            envelope
                .with_hint("Mention one of the supported cuisine styles in the sentence")
                .with_details(serde_json::json!({ "known_styles": known }))
        }
        RecommendError::Store(err) if err.is_unavailable() => {
            envelope.with_hint("The restaurant store is temporarily unavailable; retry later")
        }
        RecommendError::Store(_) => envelope,
    }
}
