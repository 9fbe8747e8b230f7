use crate::error::{RecommendError, Result};
use crate::outcome::RecommendationOutcome;
use crate::selector::RecommendationSelector;
use crate::sentence::{FilterCriteria, SentenceParser};
use chrono::NaiveTime;
use eatery_store::{CuisineStyle, RecordStore, RestaurantRecord, StoreQuery};
use std::sync::Arc;
use std::time::Instant;

/// Result of running the pipeline for already-validated criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub recommendation: Option<RestaurantRecord>,
    pub candidates: usize,
}

/// Parses a raw sentence and rejects requests the store should never see.
pub fn parse_request(sentence: Option<&str>) -> Result<FilterCriteria> {
    let sentence = sentence
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RecommendError::MissingSentence)?;

    let criteria = SentenceParser::parse(sentence);
    if criteria.style.is_none() {
        return Err(RecommendError::UnsupportedStyle {
            known: CuisineStyle::known_list(),
        });
    }
    Ok(criteria)
}

/// Request entry point: sentence in, categorized outcome out.
///
/// Holds the process-wide store handle; every request is otherwise independent.
#[derive(Clone)]
pub struct RecommendationService {
    query: StoreQuery,
}

impl RecommendationService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            query: StoreQuery::new(store),
        }
    }

    pub fn table(&self) -> &str {
        self.query.store().table()
    }

    pub fn backend_name(&self) -> &'static str {
        self.query.store().backend_name()
    }

    /// Queries the store and picks the first acceptable record.
    pub async fn find(&self, criteria: &FilterCriteria, now: NaiveTime) -> Result<Selection> {
        let records = self.query.fetch(&criteria.scan_filter()).await?;
        let candidates = records.len();
        let recommendation = RecommendationSelector::select(records, criteria, now);
        Ok(Selection {
            recommendation,
            candidates,
        })
    }

    /// Never fails: every error becomes an outcome carrying its status.
    pub async fn recommend(&self, sentence: Option<&str>, now: NaiveTime) -> RecommendationOutcome {
        let started = Instant::now();
        log::info!("Received recommendation request: sentence={sentence:?} now={now}");

        let mut outcome = match parse_request(sentence) {
            Ok(criteria) => {
                log::debug!("Parsed criteria: {criteria:?}");
                self.run(criteria, now).await
            }
            Err(err) => {
                log::info!("Rejected request: {err}");
                RecommendationOutcome::failed(&err, None)
            }
        };

        outcome.meta.table = Some(self.table().to_string());
        outcome.meta.duration_ms = Some(started.elapsed().as_millis() as u64);
        log::info!(
            "Returning {} in {}ms",
            outcome.status,
            outcome.meta.duration_ms.unwrap_or_default()
        );
        outcome
    }

    async fn run(&self, criteria: FilterCriteria, now: NaiveTime) -> RecommendationOutcome {
        match self.find(&criteria, now).await {
            Ok(selection) => {
                let mut outcome = match selection.recommendation {
                    Some(record) => {
                        log::info!("Recommending '{}'", record.name);
                        RecommendationOutcome::recommended(record, criteria)
                    }
                    None => RecommendationOutcome::no_match(criteria),
                };
                outcome.meta.candidates = Some(selection.candidates);
                outcome
            }
            Err(err) => {
                log::warn!("Recommendation failed ({}): {err}", err.code());
                RecommendationOutcome::failed(&err, Some(criteria))
            }
        }
    }
}
