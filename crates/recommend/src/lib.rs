//! # Eatery Recommend
//!
//! Turns a free-text request into a single restaurant recommendation.
//!
//! ## Pipeline
//!
//! ```text
//! sentence
//!     │
//!     ├──> SentenceParser ──> FilterCriteria (style, vegetarian, deliveries, open_now)
//!     │
//!     ├──> StoreQuery (style/vegetarian/deliveries pushed to the store)
//!     │
//!     └──> RecommendationSelector
//!            └─ first record in store order that is open now (when asked)
//! ```
//!
//! [`RecommendationService::recommend`] is the only place where failures are
//! turned into a categorized [`RecommendationOutcome`].

mod error;
mod hours;
mod outcome;
mod selector;
mod sentence;
mod service;

pub use error::{RecommendError, Result};
pub use hours::{is_open, parse_time_of_day, OpeningHours};
pub use outcome::{RecommendationOutcome, NO_MATCH_MESSAGE};
pub use selector::RecommendationSelector;
pub use sentence::{
    FilterCriteria, SentenceParser, DELIVERY_KEYWORDS, OPEN_NOW_KEYWORDS, VEGETARIAN_KEYWORDS,
};
pub use service::{parse_request, RecommendationService, Selection};
