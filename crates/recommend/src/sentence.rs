use eatery_store::{CuisineStyle, RestaurantRecord, ScanFilter};
use serde::{Deserialize, Serialize};

pub const VEGETARIAN_KEYWORDS: [&str; 2] = ["vegetarian", "vegeterian"];
pub const DELIVERY_KEYWORDS: [&str; 2] = ["delivery", "delivers"];
pub const OPEN_NOW_KEYWORDS: [&str; 2] = ["open now", "currently open"];

/// Structured criteria extracted from one request sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub style: Option<CuisineStyle>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub deliveries: bool,
    #[serde(default)]
    pub open_now: bool,
}

impl FilterCriteria {
    /// The part of the criteria pushed down to the store.
    pub fn scan_filter(&self) -> ScanFilter {
        ScanFilter {
            style: self.style,
            vegetarian: self.vegetarian,
            deliveries: self.deliveries,
        }
    }

    /// Whether `record` satisfies the store-side criteria (not "open now").
    pub fn accepts(&self, record: &RestaurantRecord) -> bool {
        self.scan_filter()
            .expression()
            .map_or(true, |expression| expression.matches(record))
    }
}

/// Fixed-keyword extraction of [`FilterCriteria`] from free text.
pub struct SentenceParser;

impl SentenceParser {
    pub fn parse(sentence: &str) -> FilterCriteria {
        let lowered = sentence.to_lowercase();
        FilterCriteria {
            style: Self::detect_style(&lowered),
            vegetarian: contains_any(&lowered, &VEGETARIAN_KEYWORDS),
            deliveries: contains_any(&lowered, &DELIVERY_KEYWORDS),
            open_now: contains_any(&lowered, &OPEN_NOW_KEYWORDS),
        }
    }

    /// Leftmost style keyword in the sentence; ties keep declaration order.
    fn detect_style(lowered: &str) -> Option<CuisineStyle> {
        CuisineStyle::ALL
            .into_iter()
            .filter_map(|style| lowered.find(style.as_str()).map(|pos| (pos, style)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, style)| style)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_every_signal() {
        let criteria = SentenceParser::parse(
            "Looking for vegetarian Indian food that offers delivery and is open now",
        );
        assert_eq!(
            criteria,
            FilterCriteria {
                style: Some(CuisineStyle::Indian),
                vegetarian: true,
                deliveries: true,
                open_now: true,
            }
        );
    }

    #[test]
    fn each_known_style_is_detected_case_insensitively() {
        for style in CuisineStyle::ALL {
            let sentence = format!("any {} place", style.as_str().to_uppercase());
            assert_eq!(SentenceParser::parse(&sentence).style, Some(style));
        }
    }

    #[test]
    fn leftmost_style_wins() {
        let criteria = SentenceParser::parse("either mexican or italian is fine");
        assert_eq!(criteria.style, Some(CuisineStyle::Mexican));

        let criteria = SentenceParser::parse("italian, otherwise mexican");
        assert_eq!(criteria.style, Some(CuisineStyle::Italian));
    }

    #[test]
    fn keyword_variants() {
        assert!(SentenceParser::parse("a vegeterian spot").vegetarian);
        assert!(SentenceParser::parse("someone who delivers").deliveries);
        assert!(SentenceParser::parse("Currently Open please").open_now);
    }

    #[test]
    fn absent_signals_stay_false() {
        assert_eq!(
            SentenceParser::parse("Show me Thai food"),
            FilterCriteria::default()
        );
        assert_eq!(SentenceParser::parse(""), FilterCriteria::default());
    }

    #[test]
    fn open_requires_the_full_phrase() {
        assert!(!SentenceParser::parse("open late tonight").open_now);
    }

    #[test]
    fn accepts_rechecks_store_side_criteria() {
        let criteria = FilterCriteria {
            style: Some(CuisineStyle::French),
            vegetarian: true,
            ..Default::default()
        };
        let veg = RestaurantRecord::new("a", "french").with_vegetarian(true);
        let meat = RestaurantRecord::new("b", "french");
        assert!(criteria.accepts(&veg));
        assert!(!criteria.accepts(&meat));
        assert!(FilterCriteria::default().accepts(&meat));
    }
}
