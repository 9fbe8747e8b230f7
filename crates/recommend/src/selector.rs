use crate::hours::is_open;
use crate::sentence::FilterCriteria;
use chrono::NaiveTime;
use eatery_store::RestaurantRecord;

/// First-match selection over store results. No scoring, no fallback.
pub struct RecommendationSelector;

impl RecommendationSelector {
    /// Returns the first record, in the order given, that satisfies `criteria`.
    ///
    /// Store-side criteria are re-checked so the result holds every requested
    /// property even if a backend ignored part of the filter.
    pub fn select<I>(
        records: I,
        criteria: &FilterCriteria,
        now: NaiveTime,
    ) -> Option<RestaurantRecord>
    where
        I: IntoIterator<Item = RestaurantRecord>,
    {
        records.into_iter().find(|record| {
            if !criteria.accepts(record) {
                log::debug!("Skipping '{}': does not match criteria", record.name);
                return false;
            }
            if criteria.open_now && !is_open(record, now) {
                log::debug!("Skipping '{}': closed at {now}", record.name);
                return false;
            }
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hours::parse_time_of_day;
    use eatery_store::CuisineStyle;
    use pretty_assertions::assert_eq;

    fn noon() -> NaiveTime {
        parse_time_of_day("12:00").unwrap()
    }

    fn open_now() -> FilterCriteria {
        FilterCriteria {
            open_now: true,
            ..Default::default()
        }
    }

    #[test]
    fn first_open_record_wins() {
        let records = vec![
            RestaurantRecord::new("a", "italian").with_hours("18:00", "23:00"),
            RestaurantRecord::new("b", "italian").with_hours("11:00", "15:00"),
            RestaurantRecord::new("c", "italian").with_hours("00:00", "23:59"),
        ];
        let picked = RecommendationSelector::select(records, &open_now(), noon()).unwrap();
        assert_eq!(picked.name, "b");
    }

    #[test]
    fn without_open_now_hours_are_ignored() {
        let records = vec![
            RestaurantRecord::new("closed", "italian").with_hours("18:00", "23:00"),
            RestaurantRecord::new("no hours", "italian"),
        ];
        let picked =
            RecommendationSelector::select(records, &FilterCriteria::default(), noon()).unwrap();
        assert_eq!(picked.name, "closed");
    }

    #[test]
    fn nothing_open_is_no_match() {
        let records = vec![
            RestaurantRecord::new("late", "korean").with_hours("22:00", "02:00"),
            RestaurantRecord::new("broken", "korean").with_hours("??", "02:00"),
        ];
        assert_eq!(
            RecommendationSelector::select(records, &open_now(), noon()),
            None
        );
        assert_eq!(
            RecommendationSelector::select(Vec::new(), &open_now(), noon()),
            None
        );
    }

    #[test]
    fn records_violating_store_criteria_are_skipped() {
        let criteria = FilterCriteria {
            style: Some(CuisineStyle::Chinese),
            deliveries: true,
            ..Default::default()
        };
        let records = vec![
            RestaurantRecord::new("no delivery", "chinese"),
            RestaurantRecord::new("wrong style", "french").with_deliveries(true),
            RestaurantRecord::new("right", "Chinese").with_deliveries(true),
        ];
        let picked = RecommendationSelector::select(records, &criteria, noon()).unwrap();
        assert_eq!(picked.name, "right");
    }
}
